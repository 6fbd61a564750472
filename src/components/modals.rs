pub mod consultation;
pub mod login;
pub mod service_detail;
pub mod wizard;

use yew::prelude::*;

use consultation::ConsultationModal;
use login::LoginModal;
use service_detail::ServiceModal;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub wide: bool,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Overlay plus dialog box. Clicking the backdrop or the close button calls
/// `on_close`; clicks inside the dialog do not.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let close = props.on_close.reform(|_: MouseEvent| ());
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={close.clone()}>
            <div class={classes!("modal-dialog", props.wide.then(|| "wide"))} onclick={keep_open}>
                <button class="modal-close" onclick={close}>{"✕"}</button>
                <h2 class="modal-title">{props.title.clone()}</h2>
                if let Some(description) = props.description.clone() {
                    <p class="modal-description">{description}</p>
                }
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Modals)]
pub fn modals() -> Html {
    html! {
        <>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: rgba(15, 23, 42, 0.6);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                }
                .modal-dialog {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    max-height: 90vh;
                    overflow-y: auto;
                    background: white;
                    border-radius: 1.25rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .modal-dialog.wide {
                    max-width: 56rem;
                }
                .modal-close {
                    position: absolute;
                    top: 1rem;
                    inset-inline-start: 1rem;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #64748b;
                    cursor: pointer;
                }
                .modal-title {
                    text-align: center;
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }
                .modal-description {
                    text-align: center;
                    color: #64748b;
                    margin-bottom: 1.5rem;
                }
                .modal-dialog form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .modal-dialog label {
                    display: block;
                    font-size: 0.9rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                "#}
            </style>
            <LoginModal />
            <ConsultationModal />
            <ServiceModal />
        </>
    }
}

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::ModalFrame;
use crate::components::fields::{bind, error_text, input_class};
use crate::forms::{Field, FieldError, FieldErrors, LoginForm};
use crate::store::use_store;

#[function_component(LoginModal)]
pub fn login_modal() -> Html {
    let store = use_store();
    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::new);
    let show_password = use_state(|| false);
    let is_loading = use_state(|| false);

    let on_close = {
        let store = store.clone();
        Callback::from(move |_: ()| store.set_login_modal_open(false))
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };

    let onsubmit = {
        let store = store.clone();
        let form = form.clone();
        let errors = errors.clone();
        let is_loading = is_loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_loading {
                return;
            }
            let credentials = (*form).clone();
            if let Err(found) = credentials.validate() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());
            is_loading.set(true);

            let store = store.clone();
            let form = form.clone();
            let errors = errors.clone();
            let is_loading = is_loading.clone();
            spawn_local(async move {
                match store.login(&credentials.email, &credentials.password).await {
                    Ok(_) => form.set(LoginForm::default()),
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        let mut rejected = FieldErrors::new();
                        rejected.insert(Field::Email, FieldError::Rejected(e.to_string()));
                        errors.set(rejected);
                    }
                }
                is_loading.set(false);
            });
        })
    };

    if !store.login_modal_open {
        return html! {};
    }

    html! {
        <ModalFrame title="تسجيل الدخول" description="ادخل بياناتك للوصول إلى حسابك" {on_close}>
            <form {onsubmit}>
                <div>
                    <input
                        type="email"
                        class={input_class(&errors, Field::Email)}
                        placeholder="البريد الإلكتروني"
                        value={form.email.clone()}
                        oninput={bind(&form, |f, v| f.email = v)}
                    />
                    { error_text(&errors, Field::Email) }
                </div>
                <div class="password-field">
                    <input
                        type={if *show_password { "text" } else { "password" }}
                        class={input_class(&errors, Field::Password)}
                        placeholder="كلمة المرور"
                        value={form.password.clone()}
                        oninput={bind(&form, |f, v| f.password = v)}
                    />
                    <button type="button" class="icon-button" onclick={toggle_password}>
                        { if *show_password { "🙈" } else { "👁" } }
                    </button>
                    { error_text(&errors, Field::Password) }
                </div>
                <button type="button" class="link-button">{"نسيت كلمة المرور؟"}</button>
                <button type="submit" class="btn-primary wide" disabled={*is_loading}>
                    { if *is_loading { "جاري تسجيل الدخول..." } else { "تسجيل الدخول" } }
                </button>
                <p class="modal-description">
                    {"ليس لديك حساب؟ "}
                    <button type="button" class="link-button">{"سجل الآن"}</button>
                </p>
            </form>
        </ModalFrame>
    }
}

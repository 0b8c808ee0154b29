use crate::state::PlayerProfile;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RegisterViewProps {
    pub on_register: Callback<PlayerProfile>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let company_ref = use_node_ref();
    let error = use_state(|| None::<String>);

    let onsubmit = {
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let company_ref = company_ref.clone();
        let error = error.clone();
        let on_register = props.on_register.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = |r: &NodeRef| {
                r.cast::<HtmlInputElement>()
                    .map(|el| el.value())
                    .unwrap_or_default()
            };
            match PlayerProfile::new(&value(&name_ref), &value(&email_ref), &value(&company_ref)) {
                Ok(profile) => {
                    error.set(None);
                    on_register.emit(profile);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        })
    };

    let field = "padding:8px 10px; background:#161b22; color:#e6edf3; border:1px solid #30363d; border-radius:6px; font-family:inherit; font-size:12px;";
    html! {
        <form {onsubmit} style="display:flex; flex-direction:column; gap:10px; min-width:320px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:24px 28px;">
            <h2 style="margin:0 0 6px 0; font-size:16px; color:#58a6ff; text-align:center;">{"Register to play"}</h2>
            <input ref={name_ref} type="text" placeholder="Name" style={field} />
            <input ref={email_ref} type="email" placeholder="Email" style={field} />
            <input ref={company_ref} type="text" placeholder="Company (optional)" style={field} />
            { if let Some(msg) = &*error { html!{ <div style="font-size:11px; color:#f85149;">{ msg.clone() }</div> } } else { html!{} } }
            <button type="submit" style="margin-top:6px; padding:10px; font-family:inherit;">{"START GAME"}</button>
        </form>
    }
}

use yew::prelude::*;

#[function_component]
pub fn ControlsPanel() -> Html {
    let hint = "display:flex; justify-content:space-between; gap:16px;";
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:260px; display:flex; flex-direction:column; gap:6px; font-size:10px;">
        <div style={hint}><span>{"SPACE / ↑ / tap"}</span><span style="opacity:0.7;">{"jump"}</span></div>
        <div style={hint}><span>{"↓ (hold)"}</span><span style="opacity:0.7;">{"duck"}</span></div>
        <div style="opacity:0.6;">{"Score climbs with distance. Night falls every 700."}</div>
    </div>}
}

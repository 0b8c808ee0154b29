use super::controls_panel::ControlsPanel;
use crate::config::GameConfig;
use crate::web;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub player_name: String,
    pub on_finish: Callback<u32>,
}

/// Hosts one engine for the lifetime of the component.
#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let mount_error = use_state(|| None::<String>);

    {
        let canvas_ref = canvas_ref.clone();
        let on_finish = props.on_finish.clone();
        let mount_error = mount_error.clone();
        use_effect_with((), move |_| {
            let game = web::mount(
                canvas_ref.cast::<HtmlCanvasElement>(),
                GameConfig::from_storage(),
                move |score| on_finish.emit(score),
            )
            .and_then(|mut game| game.start().map(|_| game));
            let game = match game {
                Ok(game) => Some(game),
                Err(e) => {
                    log::error!("could not start game: {}", e);
                    mount_error.set(Some(e.to_string()));
                    None
                }
            };
            move || {
                if let Some(mut game) = game {
                    game.destroy();
                }
            }
        });
    }

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:10px; width:100%; max-width:800px;">
            <div style="align-self:flex-start; font-size:12px; opacity:0.8;">{ format!("Player: {}", props.player_name) }</div>
            <canvas
                ref={canvas_ref}
                style="width:100%; image-rendering:pixelated; border:1px solid #30363d; border-radius:6px; touch-action:none;"
            />
            { if let Some(msg) = &*mount_error { html!{ <div style="font-size:11px; color:#f85149;">{ msg.clone() }</div> } } else { html!{} } }
            <ControlsPanel />
        </div>
    }
}

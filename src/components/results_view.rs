use super::scoreboard_panel::ScoreboardPanel;
use crate::state::Scoreboard;
use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsViewProps {
    pub player_name: String,
    pub score: u32,
    pub rank: Option<usize>,
    pub scoreboard: Scoreboard,
    pub play_again: Callback<()>,
}

#[function_component]
pub fn ResultsView(props: &ResultsViewProps) -> Html {
    let play_again_btn = {
        let cb = props.play_again.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:16px;">
            <div style="background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:320px;">
                <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
                <p style="margin:4px 0;">{ props.player_name.clone() }</p>
                <p style="margin:4px 0; font-size:24px;">{ format_score(props.score) }</p>
                { match props.rank {
                    Some(rank) => html!{ <p style="margin:4px 0; font-size:11px; color:#58a6ff;">{ format!("#{} on this page's board", rank) }</p> },
                    None => html!{},
                } }
                <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                    <button onclick={play_again_btn}>{"Play again"}</button>
                </div>
            </div>
            <ScoreboardPanel scoreboard={props.scoreboard.clone()} highlight={props.player_name.clone()} />
        </div>
    }
}

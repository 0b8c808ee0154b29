use crate::state::Scoreboard;
use crate::util::format_score;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreboardPanelProps {
    pub scoreboard: Scoreboard,
    /// Rows for this name are tinted.
    pub highlight: String,
}

#[function_component]
pub fn ScoreboardPanel(props: &ScoreboardPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // rank | name | company | score
    let rank_style = "width:28px; text-align:right; flex-shrink:0; opacity:0.7;";
    let name_style = "flex:1; font-weight:500;";
    let company_style = "flex:1; opacity:0.6;";
    let score_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:360px; display:flex; flex-direction:column; gap:8px; font-size:11px;">
            <div style="font-weight:600; margin-bottom:4px;">{"Leaderboard"}</div>
            { for props.scoreboard.entries().iter().enumerate().map(|(i, e)| {
                let color = if e.name == props.highlight { "color:#d4af37;" } else { "" };
                html! {
                    <div style={format!("{} {}", row_style, color)}>
                        <span style={rank_style}>{ i + 1 }</span>
                        <span style={name_style}>{ e.name.clone() }</span>
                        <span style={company_style}>{ e.company.clone().unwrap_or_else(|| "-".to_string()) }</span>
                        <span style={score_style}>{ format_score(e.score) }</span>
                    </div>
                }
            }) }
        </div>
    }
}

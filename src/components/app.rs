use super::{game_view::GameView, register_view::RegisterView, results_view::ResultsView};
use crate::state::{PlayerProfile, Screen, Session, SessionAction};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(Session::default);

    let on_register = {
        let session = session.clone();
        Callback::from(move |profile: PlayerProfile| session.dispatch(SessionAction::Register(profile)))
    };
    let on_finish = {
        let session = session.clone();
        Callback::from(move |score: u32| session.dispatch(SessionAction::Finish(score)))
    };
    let play_again = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::PlayAgain))
    };

    let player_name = session
        .player
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();

    let content = match session.screen {
        Screen::Register => html! { <RegisterView on_register={on_register} /> },
        Screen::Game => html! { <GameView
            key={session.run_id}
            player_name={player_name}
            on_finish={on_finish}
        /> },
        Screen::Results => html! { <ResultsView
            player_name={player_name}
            score={session.last_score.unwrap_or(0)}
            rank={session.last_rank}
            scoreboard={session.scoreboard.clone()}
            play_again={play_again}
        /> },
    };

    html! {
        <div id="root" style="min-height:100vh; display:flex; flex-direction:column; align-items:center; gap:16px; padding:24px; background:#0e1116; color:#e6edf3; font-family:'Press Start 2P', monospace;">
            <h1 style="margin:0; font-size:22px; letter-spacing:2px;">{"T-REX RUNNER"}</h1>
            { content }
        </div>
    }
}

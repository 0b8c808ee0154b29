use trex_runner::components::App;

fn main() {
    trex_runner::util::init_logging();
    yew::Renderer::<App>::new().render();
}

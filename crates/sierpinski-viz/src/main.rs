use clap::Parser;
use macroquad::window::Conf;
use sierpinski_viz::{run_scene, Preset, Scene, SceneArgs};
use tracing::error;

/// Draws a Sierpinski triangle filling an 800x600 window.
#[derive(Parser, Debug)]
#[command(name = "sierpinski-viz")]
struct Cli {
    #[command(flatten)]
    scene: SceneArgs,
}

fn scene() -> Scene {
    Scene::new(Preset::Window).with_args(&Cli::parse().scene)
}

fn window_conf() -> Conf {
    scene().window_conf("Sierpinski Triangle")
}

#[macroquad::main(window_conf)]
async fn main() {
    sierpinski_viz::init_tracing();

    if let Err(err) = run_scene(scene()).await {
        error!(%err, "cannot draw scene");
        std::process::exit(1);
    }
}

use clap::Parser;
use macroquad::window::Conf;
use sierpinski_viz::{run_scene, Preset, Scene, SceneArgs};
use tracing::{error, info};

/// Draws a red Sierpinski triangle on a 400x400 canvas; pick the depth with --depth.
#[derive(Parser, Debug)]
#[command(name = "canvas")]
struct Cli {
    #[command(flatten)]
    scene: SceneArgs,
}

fn scene() -> Scene {
    Scene::new(Preset::Canvas).with_args(&Cli::parse().scene)
}

fn window_conf() -> Conf {
    scene().window_conf("Sierpinski Triangle")
}

#[macroquad::main(window_conf)]
async fn main() {
    sierpinski_viz::init_tracing();

    let scene = scene();
    info!(depth = scene.depth, "generating");
    if let Err(err) = run_scene(scene).await {
        error!(%err, "cannot draw scene");
        std::process::exit(1);
    }
}

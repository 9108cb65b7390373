use clap::{Parser, ValueEnum};
use macroquad::prelude::*;
use sierpinski_viz::growth::{combined_positive_range, dominance_series, growth_series, to_percent, Series};
use sierpinski_viz::plot::{Axis, Plot, PALETTE};
use tracing::{error, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Complexity classes on log-log axes
    Growth,
    /// Share of each term of 9n^2 + 99n + 999 log n + 9999
    Dominance,
}

/// Plots asymptotic growth functions.
#[derive(Parser, Debug)]
#[command(name = "growth")]
struct Cli {
    /// Which figure to draw
    #[arg(long, value_enum, default_value_t = Mode::Growth)]
    mode: Mode,

    /// Samples per curve
    #[arg(long, default_value_t = 100)]
    samples: usize,

    /// Window width in pixels
    #[arg(long, value_name = "PX", default_value_t = 800)]
    width: u32,

    /// Window height in pixels
    #[arg(long, value_name = "PX", default_value_t = 600)]
    height: u32,
}

struct Figure {
    title: &'static str,
    x_label: &'static str,
    y_label: &'static str,
    series: Vec<Series>,
    plot: Plot,
}

impl Figure {
    fn build(cli: &Cli) -> Option<Figure> {
        let rect = Rect::new(90.0, 50.0, cli.width as f32 - 130.0, cli.height as f32 - 110.0);
        match cli.mode {
            Mode::Growth => {
                let series = growth_series(cli.samples);
                let (lo, hi) = combined_positive_range(&series)?;
                Some(Figure {
                    title: "Comparison of Functions on Logarithmic Scale",
                    x_label: "n (Logarithmic Scale)",
                    y_label: "Function Value (Logarithmic Scale)",
                    series,
                    plot: Plot::new(rect, Axis::log(1.0, 100.0), Axis::log(lo, hi)),
                })
            }
            Mode::Dominance => Some(Figure {
                title: "Which term is dominant?",
                x_label: "n (Logarithmic Scale)",
                y_label: "Component ratio",
                series: dominance_series(cli.samples),
                plot: Plot::new(rect, Axis::log(1.0, 1.0e6), Axis::linear(0.0, 1.0)),
            }),
        }
    }

    fn draw(&self, mode: Mode) {
        self.plot.draw_frame(self.title, self.x_label, self.y_label);
        self.plot.draw_decade_ticks_x();
        if mode == Mode::Dominance {
            self.plot.draw_ticks_y(5, to_percent);
        }

        let mut legend = Vec::with_capacity(self.series.len());
        for (i, series) in self.series.iter().enumerate() {
            let color = PALETTE[i % PALETTE.len()];
            self.plot.draw_series(series, color);
            legend.push((series.label, color));
        }
        self.plot.draw_legend(&legend);
    }
}

fn window_conf() -> Conf {
    let cli = Cli::parse();
    Conf {
        window_title: "Growth Functions".to_string(),
        window_width: i32::try_from(cli.width).unwrap_or(i32::MAX),
        window_height: i32::try_from(cli.height).unwrap_or(i32::MAX),
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    sierpinski_viz::init_tracing();

    let cli = Cli::parse();
    let Some(figure) = Figure::build(&cli) else {
        error!(samples = cli.samples, "no positive values to plot");
        std::process::exit(1);
    };
    info!(mode = ?cli.mode, curves = figure.series.len(), "figure ready");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        clear_background(WHITE);
        figure.draw(cli.mode);

        next_frame().await
    }
}

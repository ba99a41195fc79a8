//! Load a country dataset and print what the popup would show.
//!
//! ```text
//! cargo run --example country_summary -- countryData.geojson [config.toml] [ISO_A3 ...]
//! ```

use std::error::Error;

use tracing_subscriber::EnvFilter;

use worldstats_plot::{
    Action, AppConfig, AppState, Dataset, Metric, PointerEvent, format_magnitude, popup_charts,
};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1).peekable();
    let Some(path) = args.next() else {
        eprintln!("usage: country_summary <dataset.json> [config.toml] [ISO_A3 ...]");
        std::process::exit(2);
    };
    let config = if args.peek().is_some_and(|arg| arg.ends_with(".toml")) {
        AppConfig::load(args.next().unwrap_or_default())?
    } else {
        AppConfig::default()
    };
    let dataset = Dataset::load(&path)?;
    println!("{} countries", dataset.len());

    if let Some(stats) = dataset.global_stats().get(Metric::GdpPerCapita) {
        println!(
            "GDP per capita ranges from {} to {}",
            format_magnitude(stats.min),
            format_magnitude(stats.max)
        );
    }

    let mut state = AppState::new();
    for code in args {
        state = state.apply(Action::ToggleCountry(code));
    }
    if state.selected().is_empty() {
        if let Some(first) = dataset.countries().first() {
            state = state.apply(Action::ToggleCountry(first.code().to_string()));
        }
    }

    let Some(popup) = popup_charts(&state, &dataset, &config) else {
        println!("nothing selected");
        return Ok(());
    };
    if let Some(title) = &popup.title {
        println!("{title}");
    }
    for entry in &popup.legend {
        println!("  {} {} ({})", entry.code, entry.name, entry.color);
    }

    let chart = &popup.life_expectancy;
    if let Some(heading) = chart.heading() {
        println!("{heading}");
    }
    let ticks: Vec<_> = chart.x_ticks().into_iter().map(|tick| tick.label).collect();
    println!("  years: {}", ticks.join(" "));
    let plot = chart.config().plot_rect();
    let middle = PointerEvent::moved(plot.min.x + plot.width() / 2.0, plot.min.y + plot.height() / 2.0);
    for tooltip in chart.hover(&middle).tooltips.points {
        for row in tooltip.rows {
            println!("  {}", row.text);
        }
    }

    if let Some(insights) = &popup.insights {
        println!("{}", insights.correlation_level().label());
        if let Some(similar) = &insights.most_similar_life_exp {
            println!("most similar life expectancy: {similar}");
        }
    }
    Ok(())
}

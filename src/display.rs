use crate::colors::ColorScheme;
use crate::context::{FightData, WinStep};
use crate::graph::Edge;
use crate::pathfinding::NotablePath;
use crate::search::{LookupError, SearchRequest, SearchResult};
use crate::utils::format_number;

/// Presentation switches shared by every subcommand.
pub struct DisplayOptions {
    pub verbose: bool,
    pub quiet: bool,
    pub hide_urls: bool,
}

pub fn display_lookup_error(error: &LookupError, colors: &ColorScheme) {
    eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
    if !error.suggestions.is_empty() {
        let suggestions = error
            .suggestions
            .iter()
            .map(|name| colors.fighter_name(&format!("\"{}\"", name)).to_string())
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("   Did you mean: {}", suggestions);
    }
}

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🥊 Finding chain of wins from {} to {}",
        colors.fighter_name(&format!("\"{}\"", request.from_name)),
        colors.fighter_name(&format!("\"{}\"", request.to_name))
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(
    result: &SearchResult<'_>,
    data: &FightData,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    if options.verbose {
        println!("\n---\n");
    }

    match &result.path {
        Some(path) => display_successful_path(path, data, options, colors),
        None => println!(
            "{} {} and {}",
            colors.error("❌ No chain of wins found between"),
            colors.fighter_name(&format!("\"{}\"", result.from_name)),
            colors.fighter_name(&format!("\"{}\"", result.to_name))
        ),
    }

    if options.verbose {
        display_search_statistics(result.fighters_visited, result.search_duration, colors);
    }
}

fn display_successful_path(path: &[&Edge], data: &FightData, options: &DisplayOptions, colors: &ColorScheme) {
    if path.is_empty() {
        println!("{} Same fighter at both ends", colors.success("✅"));
        return;
    }

    if options.verbose {
        println!(
            "{} Found chain with {} wins:\n",
            colors.success("✅"),
            colors.number(&path.len().to_string())
        );
    }

    let steps = data.hydrate_path(path);

    // Show chain flow first
    let chain_flow = std::iter::once(&steps[0].winner)
        .chain(steps.iter().map(|step| &step.loser))
        .map(|fighter| colors.fighter_name(&format!("\"{}\"", fighter.name)).to_string())
        .collect::<Vec<_>>()
        .join(" > ");
    println!("{}", chain_flow);

    if !options.quiet {
        println!();
        for (step_index, step) in steps.iter().enumerate() {
            println!("{}", format_win_step(step_index, step, options, colors));
        }
    }
}

fn format_win_step(step_index: usize, step: &WinStep, options: &DisplayOptions, colors: &ColorScheme) -> String {
    let step_number = format!("{}.", step_index + 1);
    let mut formatted_line = format!(
        "{:3} {} defeated {}",
        colors.step_number(&step_number),
        colors.fighter_name(&format!("\"{}\"", step.winner.name)),
        colors.fighter_name(&format!("\"{}\"", step.loser.name))
    );

    match (&step.date, &step.method) {
        (Some(date), Some(method)) => {
            formatted_line.push_str(&format!(" on {} via {}", date, colors.method(method)))
        }
        (Some(date), None) => formatted_line.push_str(&format!(" on {}", date)),
        (None, Some(method)) => formatted_line.push_str(&format!(" via {}", colors.method(method))),
        (None, None) => {}
    }

    if !options.hide_urls {
        formatted_line.push_str(&format!(
            "\n    {} {}\n    {} {}",
            step.winner.name,
            colors.url(&step.winner.image_ref),
            step.loser.name,
            colors.url(&step.loser.image_ref)
        ));
    }

    formatted_line
}

pub fn display_notable_results(
    fighter_id: &str,
    found: &[NotablePath<'_>],
    data: &FightData,
    colors: &ColorScheme,
) {
    let fighter_name = data.directory.name_of(fighter_id);

    if found.is_empty() {
        println!(
            "{} {}",
            colors.error("❌ No notable fighters reachable from"),
            colors.fighter_name(&format!("\"{}\"", fighter_name))
        );
        return;
    }

    println!(
        "{} {} notable fighters reachable from {}:\n",
        colors.success("✅"),
        colors.number(&found.len().to_string()),
        colors.fighter_name(&format!("\"{}\"", fighter_name))
    );

    for (index, notable) in found.iter().enumerate() {
        let details = data.directory.details_of(notable.target);
        println!(
            "{:3} {} {} - {} wins away",
            colors.step_number(&format!("{}.", index + 1)),
            colors.fighter_name(&format!("\"{}\"", details.name)),
            colors.rating(&format!("[{:.0}]", details.rating)),
            colors.number(&notable.path.len().to_string())
        );
    }
}

fn display_search_statistics(fighters_visited: usize, search_duration: f64, colors: &ColorScheme) {
    println!("\n---\n");
    println!(
        "{} Explored {} fighters in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(fighters_visited)),
        colors.number(&format!("{:.3}", search_duration))
    );
}

use clap::Parser;
use mmamath::colors::ColorScheme;
use mmamath::display::{
    DisplayOptions, display_lookup_error, display_notable_results, display_search_info,
    display_search_results,
};
use mmamath::json_output::{create_json_output, create_notable_output, print_json_output};
use mmamath::logging::init_logging;
use mmamath::search::{create_search_request, execute_path_search, resolve_fighter};
use mmamath::*;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let data = match MmaMathApp::new(args.data_dir.clone()).and_then(|app| app.load_data()) {
        Ok(data) => data,
        Err(error) => {
            eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
            std::process::exit(1);
        }
    };

    let options = DisplayOptions {
        verbose: args.verbose,
        quiet: args.quiet,
        hide_urls: args.hide_urls,
    };

    match &args.command {
        Command::Path { from, to } => run_path_search(&data, from, to, &args, &options, &colors),
        Command::Notable {
            fighter,
            limit,
            target,
        } => {
            let fighter_id = resolve_or_exit(&data, fighter, args.by_id, &colors);
            let config = PathfindingConfig::new(*limit);
            let found = data.notable_opponents(&fighter_id, &config);

            match target {
                Some(target) => {
                    let target_id = resolve_or_exit(&data, target, args.by_id, &colors);
                    if !found.iter().any(|notable| notable.target == target_id) {
                        eprintln!(
                            "{}",
                            colors.error(&format!(
                                "❌ \"{}\" is not among the notable fighters reachable from \"{}\"",
                                data.directory.name_of(&target_id),
                                data.directory.name_of(&fighter_id)
                            ))
                        );
                        std::process::exit(1);
                    }
                    run_path_search(&data, fighter, target, &args, &options, &colors)
                }
                None if args.json => {
                    print_json_output(&create_notable_output(&fighter_id, *limit, &found, &data))
                }
                None => display_notable_results(&fighter_id, &found, &data, &colors),
            }
        }
    }
}

fn run_path_search(
    data: &FightData,
    from: &str,
    to: &str,
    args: &Args,
    options: &DisplayOptions,
    colors: &ColorScheme,
) {
    let request = match create_search_request(data, from, to, args.by_id) {
        Ok(request) => request,
        Err(error) => {
            display_lookup_error(&error, colors);
            std::process::exit(1);
        }
    };

    if options.verbose && !args.json {
        display_search_info(&request, colors);
    }

    let result = execute_path_search(data, request);
    if args.json {
        print_json_output(&create_json_output(&result, data));
    } else {
        display_search_results(&result, data, options, colors);
    }
}

fn resolve_or_exit(data: &FightData, query: &str, by_id: bool, colors: &ColorScheme) -> String {
    resolve_fighter(data, query, by_id).unwrap_or_else(|error| {
        display_lookup_error(&error, colors);
        std::process::exit(1);
    })
}

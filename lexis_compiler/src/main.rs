use lexis_compiler::config::build_info;
use lexis_compiler::config::runtime::{LexicalPreferences, PrinterPreferences, RuntimeConfig};
use lexis_compiler::lexical::LexicalAnalyzer;
use lexis_compiler::logging::{Code, LogEvent};
use lexis_compiler::printer::AstPrinter;
use lexis_compiler::tokens::TokenSequence;
use lexis_compiler::utils::SourceMap;
use lexis_compiler::{file_processor, logging, pipeline, PipelineError};
use std::env;

/// Source processed when no file is given
const SAMPLE_SOURCE: &str = "let x = 45 * 10 - 2";

#[derive(Debug, Default)]
struct Options {
    file: Option<String>,
    json: bool,
    tokens_only: bool,
    help: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let runtime_config = RuntimeConfig::default();
    logging::config::init_runtime_preferences(runtime_config.logging.clone())?;

    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate pipeline configuration
    pipeline::validate_pipeline()?;

    let args: Vec<String> = env::args().collect();
    let program_name = args.first().map(String::as_str).unwrap_or("lexis");
    let options = match parse_options(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: {} [FILE] [--json] [--tokens-only] [--help]", program_name);
            std::process::exit(1);
        }
    };

    if options.help {
        print_help(program_name);
        return Ok(());
    }

    let outcome = if options.tokens_only {
        run_tokens_only(&options)
    } else {
        run_pipeline(&options, &runtime_config.printer)
    };

    if let Err(error) = outcome {
        report_error(&error, &options);
        print_diagnostics_summary(Some(error.error_code()));
        std::process::exit(1);
    }

    print_diagnostics_summary(None);
    Ok(())
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--json" => options.json = true,
            "--tokens-only" => options.tokens_only = true,
            "--help" | "-h" => options.help = true,
            flag if flag.starts_with("--") => {
                return Err(format!("Unknown option '{}'", flag));
            }
            path => {
                if options.file.is_some() {
                    return Err(format!("Unexpected extra argument '{}'", path));
                }
                options.file = Some(path.to_string());
            }
        }
    }

    Ok(options)
}

fn print_help(program_name: &str) {
    println!("Lexis front end v{}", env!("CARGO_PKG_VERSION"));
    println!("Tokenizes and parses Lexis source, then prints tokens and the AST");
    println!();
    println!("USAGE:");
    println!("    {} [FILE] [--json] [--tokens-only] [--help]", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    [FILE]    Source file to process (default: built-in sample)");
    println!();
    println!("OPTIONS:");
    println!("    --json           Print tokens, AST and lexical metrics as JSON");
    println!("    --tokens-only    Stop after tokenization");
    println!("    --help           Show this help message");
    println!();
    println!("BUILT-IN SAMPLE:");
    println!("    {}", SAMPLE_SOURCE);
    println!();
    println!("CONFIGURATION:");
    println!("    {}", build_info::source_info());
    for line in logging::config::get_config_summary().lines() {
        println!("    {}", line);
    }
}

fn run_tokens_only(options: &Options) -> Result<(), PipelineError> {
    let tokens = match &options.file {
        Some(path) => {
            let file_result = file_processor::process_file(path)?;
            let preferences = LexicalPreferences {
                split_on_newlines: true,
                ..LexicalPreferences::default()
            };
            LexicalAnalyzer::with_preferences(preferences).tokenize_file_result(&file_result)?
        }
        None => LexicalAnalyzer::new().tokenize(SAMPLE_SOURCE)?,
    };

    if options.json {
        let json = serde_json::to_string_pretty(&tokens)
            .map_err(|e| PipelineError::pipeline_error(&e.to_string()))?;
        println!("{}", json);
    } else {
        print_tokens(&tokens);
    }
    Ok(())
}

fn run_pipeline(options: &Options, printer: &PrinterPreferences) -> Result<(), PipelineError> {
    let result = match &options.file {
        Some(path) => pipeline::process_file(path)?,
        None => pipeline::process_source(SAMPLE_SOURCE)?,
    };

    if options.json {
        let json = result
            .to_output()
            .to_json_pretty()
            .map_err(|e| PipelineError::pipeline_error(&e.to_string()))?;
        println!("{}", json);
        return Ok(());
    }

    print_tokens(&result.tokens);
    println!();
    print!("{}", AstPrinter::new(printer.clone()).render(&result.ast));
    Ok(())
}

fn print_tokens(tokens: &TokenSequence) {
    for (index, token) in tokens.iter().enumerate() {
        println!("Token ({}): {} [{}]", index, token.kind(), token.value());
    }
}

fn report_error(error: &PipelineError, options: &Options) {
    eprintln!("FAILED [{}] {} stage", error.error_code(), error.stage());

    let source = match &options.file {
        Some(path) => std::fs::read_to_string(path).ok(),
        None => Some(SAMPLE_SOURCE.to_string()),
    };

    match (error.span(), source) {
        (Some(span), Some(source)) => {
            eprint!("{}", SourceMap::new(source).format_error(&span, &error.to_string()));
        }
        _ => eprintln!("error: {}", error),
    }
}

/// Buffered diagnostics minus the ones `report_error` already printed
fn reportable_diagnostics(events: Vec<LogEvent>, reported: Option<Code>) -> Vec<LogEvent> {
    events
        .into_iter()
        .filter(|event| !(event.is_error() && Some(event.code) == reported))
        .collect()
}

fn print_diagnostics_summary(reported: Option<Code>) {
    let diagnostics = reportable_diagnostics(logging::collected_diagnostics(), reported);
    if diagnostics.is_empty() {
        return;
    }

    for event in &diagnostics {
        eprintln!("{}", event.format());
    }
    let errors = diagnostics.iter().filter(|e| e.is_error()).count();
    let warnings = diagnostics.iter().filter(|e| e.is_warning()).count();
    eprintln!("{} error(s), {} warning(s) logged", errors, warnings);
}

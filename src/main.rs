use exambot_rust::config::Configuration;
use exambot_rust::coordinator::CoordinatorBuilder;
use exambot_rust::error::AppError;
use exambot_rust::session::Question;
use exambot_rust::sink::{run_sink, LoggingSink};
use tracing::{info, Level};

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

fn load_questions(configuration: &Configuration) -> Result<Vec<Question>, AppError> {
    match &configuration.exam_path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .map_err(|e| AppError::Coordinator(format!("Failed to read {path}: {e}")))?;
            let questions: Vec<Question> = serde_json::from_str(&content)
                .map_err(|e| AppError::Coordinator(format!("Failed to parse {path}: {e}")))?;
            Ok(questions)
        }
        None => Ok(demo_questions()),
    }
}

/// Standalone question set for running without the exam backend.
fn demo_questions() -> Vec<Question> {
    let q = |id: &str, text: &str, options: [&str; 4]| {
        Question::new(id, text, options.map(str::to_string))
    };
    vec![
        q(
            "demo-1",
            "Which data structure gives O(1) average lookup by key?",
            ["Hash map", "Linked list", "Binary heap", "Stack"],
        ),
        q(
            "demo-2",
            "What does TCP provide that UDP does not?",
            ["Ordered delivery", "Broadcast", "Lower latency", "Checksums"],
        ),
        q(
            "demo-3",
            "Which HTTP status code means Not Found?",
            ["404", "200", "301", "500"],
        ),
    ]
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();

    let configuration = Configuration::load()?;
    let questions = load_questions(&configuration)?;
    info!(
        "Starting exam gesture daemon: {} questions, hold {}ms, port {}",
        questions.len(),
        configuration.hold_duration_ms,
        configuration.listen_port
    );

    let (coordinator, action_rx) = CoordinatorBuilder::new(configuration)
        .questions(questions)
        .build()?;

    let sink_task = tokio::spawn(run_sink(action_rx, LoggingSink));

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| AppError::Coordinator(format!("Failed to listen for ctrl-c: {e}")))?;
    info!("Shutting down");
    coordinator.stop();
    sink_task.abort();
    Ok(())
}

//! # churn-cli
//!
//! Command-line interface for the churn classifier and the offline drift check.

use churn::{load_model, CustomerFeatures, InferenceService, ModelConfig, PredictionResult};
use clap::{Parser, Subcommand};
use drift::{DriftConfig, DriftDetector, DriftReport};
use serde::Deserialize;
use server::{ServerConfig, TelemetryConfig};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "churn")]
#[command(about = "Bank churn prediction and drift monitoring CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare production data with the reference data set
    Drift {
        /// Reference CSV file (training data)
        #[arg(short, long)]
        reference: PathBuf,

        /// Production CSV file
        #[arg(short, long)]
        production: PathBuf,

        /// Significance level; a column drifts when p-value < threshold
        #[arg(short, long, default_value = "0.05")]
        threshold: f64,

        /// Extra categorical column compared with a chi-square test (repeatable)
        #[arg(short, long)]
        categorical: Vec<String>,

        /// Also compare the geography and gender indicator columns
        #[arg(long)]
        one_hot: bool,

        /// Exit with an error when any column drifts
        #[arg(long)]
        fail_on_drift: bool,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Score customers with a model artifact
    Predict {
        /// Model artifact (JSON)
        #[arg(short, long, default_value = churn::DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// Input file: one customer object or an array of them
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the REST API server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Model artifact (defaults to MODEL_PATH or model/model.json)
        #[arg(short, long)]
        model: Option<PathBuf>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CustomerInput {
    One(CustomerFeatures),
    Many(Vec<CustomerFeatures>),
}

fn drift_config(
    threshold: f64,
    categorical: Vec<String>,
    one_hot: bool,
) -> CliResult<DriftConfig> {
    let mut builder = DriftConfig::builder().threshold(threshold);
    if one_hot {
        builder = builder.with_one_hot_columns();
    }
    for column in categorical {
        builder = builder.categorical_column(column);
    }
    builder.build().map_err(|e| e.to_string())
}

fn write_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize results: {}", e))?;
    match output {
        Some(path) => {
            std::fs::write(path, json).map_err(|e| format!("Failed to write output: {}", e))?;
            println!("Results written to {:?}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn print_drift_summary(report: &DriftReport) {
    println!("Columns compared: {}", report.len());
    for (column, drift) in report.iter() {
        println!(
            "  {:<20} {:<12} statistic={:.4} p-value={:.4e}{}",
            column,
            drift.feature_type,
            drift.statistic,
            drift.p_value,
            if drift.drift_detected { "  DRIFT" } else { "" }
        );
    }
}

fn run_drift(
    reference: &Path,
    production: &Path,
    config: DriftConfig,
    fail_on_drift: bool,
    output: Option<&Path>,
) -> CliResult<DriftReport> {
    println!("Comparing {:?} against reference {:?}", production, reference);

    let detector = DriftDetector::new(config).map_err(|e| e.to_string())?;
    let report = detector
        .compare_files(reference, production)
        .map_err(|e| format!("Drift detection failed: {}", e))?;

    print_drift_summary(&report);
    write_json(&report, output)?;

    if fail_on_drift && report.has_drift() {
        return Err(format!(
            "Drift detected in: {}",
            report.drifted_columns().join(", ")
        ));
    }
    Ok(report)
}

fn load_customers(path: &Path) -> CliResult<Vec<CustomerFeatures>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let input: CustomerInput = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| format!("Failed to parse customers: {}", e))?;
    Ok(match input {
        CustomerInput::One(customer) => vec![customer],
        CustomerInput::Many(customers) => customers,
    })
}

fn run_predict(model: &Path, input: &Path, output: Option<&Path>) -> CliResult<Vec<PredictionResult>> {
    let model = load_model(model).map_err(|e| e.to_string())?;
    let service = InferenceService::with_model(model);

    let results = load_customers(input)?
        .iter()
        .enumerate()
        .map(|(i, customer)| {
            service
                .predict(customer)
                .map_err(|e| format!("Customer {}: {}", i + 1, e))
        })
        .collect::<CliResult<Vec<_>>>()?;

    write_json(&results, output)?;
    Ok(results)
}

fn serve_config(host: String, port: u16, model: Option<PathBuf>) -> ServerConfig {
    ServerConfig {
        host,
        port,
        model: model.map(ModelConfig::new).unwrap_or_else(ModelConfig::from_env),
    }
}

fn run_serve(config: &ServerConfig) -> CliResult<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start runtime: {}", e))?;
    runtime
        .block_on(server::serve(config))
        .map_err(|e| format!("Server failed: {}", e))
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if matches!(cli.command, Commands::Serve { .. }) {
        server::telemetry::init_tracing(&TelemetryConfig::from_env());
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "warn".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Commands::Drift {
            reference,
            production,
            threshold,
            categorical,
            one_hot,
            fail_on_drift,
            output,
        } => drift_config(threshold, categorical, one_hot).and_then(|config| {
            run_drift(&reference, &production, config, fail_on_drift, output.as_deref())
                .map(|_| ())
        }),

        Commands::Predict {
            model,
            input,
            output,
        } => run_predict(&model, &input, output.as_deref()).map(|_| ()),

        Commands::Serve { port, host, model } => run_serve(&serve_config(host, port, model)),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    const HEADER: &str = "CreditScore,Age,Balance,EstimatedSalary,Gender_Male\n";

    fn write_csv(dir: &Path, name: &str, shift: f64) -> PathBuf {
        let mut body = HEADER.to_string();
        for i in 0..40 {
            body.push_str(&format!(
                "{},{},{},{},{}\n",
                500.0 + i as f64 + shift,
                20.0 + i as f64 + shift,
                1000.0 * i as f64 + shift,
                30000.0 + 100.0 * i as f64 + shift,
                i % 2
            ));
        }
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_drift_arguments() {
        let cli = Cli::try_parse_from([
            "churn", "drift", "-r", "ref.csv", "-p", "prod.csv", "-c", "Gender_Male", "--one-hot",
        ])
        .unwrap();
        match cli.command {
            Commands::Drift {
                threshold,
                categorical,
                one_hot,
                ..
            } => {
                assert_eq!(threshold, 0.05);
                assert_eq!(categorical, vec!["Gender_Male"]);
                assert!(one_hot);
            }
            _ => panic!("expected drift command"),
        }
    }

    #[test]
    fn test_parse_serve_arguments() {
        let cli = Cli::try_parse_from(["churn", "serve", "-p", "9000", "-m", "/srv/model.json"])
            .unwrap();
        match cli.command {
            Commands::Serve { port, host, model } => {
                let config = serve_config(host, port, model);
                assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:9000");
                assert_eq!(config.model.path(), Path::new("/srv/model.json"));
            }
            _ => panic!("expected serve command"),
        }
    }

    #[test]
    fn test_run_serve_reports_bad_address() {
        let config = serve_config("not a host".to_string(), 8080, None);
        let error = run_serve(&config).unwrap_err();
        assert!(error.starts_with("Server failed"));
    }

    #[test]
    fn test_drift_config_rejects_duplicates() {
        // Gender_Male is already part of the one-hot set
        let result = drift_config(0.05, vec!["Gender_Male".to_string()], true);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_drift_identical_files() {
        let dir = tempfile::tempdir().unwrap();
        let reference = write_csv(dir.path(), "reference.csv", 0.0);
        let production = write_csv(dir.path(), "production.csv", 0.0);
        let config = drift_config(0.05, vec!["Gender_Male".to_string()], false).unwrap();

        let output = dir.path().join("report.json");
        let report = run_drift(&reference, &production, config, true, Some(&output)).unwrap();
        assert_eq!(report.len(), 5);
        assert!(!report.has_drift());

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["Gender_Male"]["type"], "categorical");
    }

    #[test]
    fn test_run_drift_fail_on_drift() {
        let dir = tempfile::tempdir().unwrap();
        let reference = write_csv(dir.path(), "reference.csv", 0.0);
        let production = write_csv(dir.path(), "production.csv", 1.0e6);
        let config = DriftConfig::default();

        let error = run_drift(&reference, &production, config, true, None).unwrap_err();
        assert!(error.contains("Age"));
    }

    #[test]
    fn test_run_drift_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let reference = write_csv(dir.path(), "reference.csv", 0.0);
        let error = run_drift(
            &reference,
            &dir.path().join("missing.csv"),
            DriftConfig::default(),
            false,
            None,
        )
        .unwrap_err();
        assert!(error.starts_with("Drift detection failed"));
    }

    #[test]
    fn test_run_predict_single_and_batch() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("model.json");
        std::fs::write(
            &model,
            r#"{"kind": "logistic", "feature_names": ["Age"], "coefficients": [0.1], "intercept": -4.0}"#,
        )
        .unwrap();

        let customer = r#"{"CreditScore": 619, "Age": 60, "Tenure": 2, "Balance": 0.0,
            "NumOfProducts": 1, "HasCrCard": 1, "IsActiveMember": 0,
            "EstimatedSalary": 101348.88, "Geography_Germany": 1,
            "Geography_Spain": 0, "Gender_Male": 0}"#;

        let single = dir.path().join("one.json");
        std::fs::write(&single, customer).unwrap();
        let results = run_predict(&model, &single, None).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].churn_prediction, 1);

        let batch = dir.path().join("many.json");
        std::fs::write(&batch, format!("[{0}, {0}]", customer)).unwrap();
        assert_eq!(run_predict(&model, &batch, None).unwrap().len(), 2);
    }

    #[test]
    fn test_run_predict_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        std::fs::write(&input, "[]").unwrap();
        assert!(run_predict(&dir.path().join("absent.json"), &input, None).is_err());
    }
}

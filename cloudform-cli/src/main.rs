use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::debug;
use similar::{ChangeTag, TextDiff};

use cloudform_core::formatter::{self, FormatConfig, OutputFormat};
use cloudform_core::graph::DependencyGraph;
use cloudform_core::lint::{self, Diagnostic, Severity};
use cloudform_core::template::{Template, TemplateFormat};

#[derive(Parser)]
#[command(name = "cloudform")]
#[command(about = "Validate, order and format AWS CloudFormation templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a template: references, conditions, cycles and typed properties
    Validate {
        /// Path to template file
        #[arg(default_value = "template.yaml")]
        file: PathBuf,
    },
    /// List resource types with typed property checks
    Types,
    /// Show the order in which CloudFormation creates the resources
    Order {
        /// Path to template file
        #[arg(default_value = "template.yaml")]
        file: PathBuf,
    },
    /// Format template files
    Fmt {
        /// Path to template file or directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Check if files are formatted (don't modify)
        #[arg(long, short)]
        check: bool,

        /// Show diff of formatting changes
        #[arg(long)]
        diff: bool,

        /// Recursively format all templates in directory
        #[arg(long, short)]
        recursive: bool,

        /// Spaces per indentation level in JSON output
        #[arg(long, default_value_t = 2)]
        indent: usize,

        /// Rewrite templates as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Rewrite templates as YAML
        #[arg(long)]
        yaml: bool,
    },
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Types => run_types(),
        Commands::Order { file } => run_order(&file),
        Commands::Fmt {
            path,
            check,
            diff,
            recursive,
            indent,
            json,
            yaml,
        } => {
            let output = if json {
                OutputFormat::Json
            } else if yaml {
                OutputFormat::Yaml
            } else {
                OutputFormat::Preserve
            };
            let config = FormatConfig {
                indent_size: indent,
                output,
                ..Default::default()
            };
            run_fmt(&path, &config, check, diff, recursive)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_template(file: &Path) -> Result<Template, String> {
    Template::load(file).map_err(|e| format!("Failed to load {}: {}", file.display(), e))
}

/// Structural lint followed by typed property checks
fn validate_template(template: &Template) -> Vec<Diagnostic> {
    let mut diagnostics = lint::lint(template);
    diagnostics.extend(cloudform_resources::check_template(template));
    diagnostics
}

fn run_validate(file: &Path) -> Result<(), String> {
    let template = load_template(file)?;

    println!("{}", "Validating...".cyan());

    let diagnostics = validate_template(&template);
    for diagnostic in &diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!("  {}: {}: {}", severity, diagnostic.path, diagnostic.message);
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        return Err(format!("{} error(s) found in {}", errors, file.display()));
    }

    println!(
        "{}",
        format!(
            "✓ {} resources validated successfully.",
            template.resources.len()
        )
        .green()
        .bold()
    );

    for (id, entry) in &template.resources {
        println!("  • {} ({})", id, entry.resource_type);
    }

    Ok(())
}

fn run_types() -> Result<(), String> {
    let mut names: Vec<&'static str> = cloudform_resources::resource_types()
        .iter()
        .map(|t| t.name())
        .collect();
    names.sort_unstable();

    println!("{}", "Resource types with typed properties:".cyan());
    for name in names {
        println!("  • {}", name);
    }
    Ok(())
}

fn deployment_order(template: &Template) -> Result<Vec<String>, String> {
    DependencyGraph::from_template(template)
        .deployment_order()
        .map_err(|e| e.to_string())
}

fn run_order(file: &Path) -> Result<(), String> {
    let template = load_template(file)?;
    let order = deployment_order(&template)?;

    println!("{}", "Deployment order:".cyan().bold());
    for (i, id) in order.iter().enumerate() {
        let resource_type = template
            .resources
            .get(id)
            .map(|entry| entry.resource_type.as_str())
            .unwrap_or_default();
        println!("  {}. {} ({})", i + 1, id, resource_type);
    }
    Ok(())
}

/// Files changed (or needing change) and files that failed to parse
struct FmtOutcome {
    changed: Vec<PathBuf>,
    errors: Vec<(PathBuf, String)>,
}

fn format_files(
    files: &[PathBuf],
    config: &FormatConfig,
    check: bool,
    show_diff: bool,
) -> Result<FmtOutcome, String> {
    let mut outcome = FmtOutcome {
        changed: Vec::new(),
        errors: Vec::new(),
    };

    for file in files {
        let content = fs::read_to_string(file)
            .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;

        match formatter::format(&content, config) {
            Ok(formatted) => {
                if content != formatted {
                    if show_diff {
                        print_diff(file, &content, &formatted);
                    }

                    if !check {
                        fs::write(file, &formatted)
                            .map_err(|e| format!("Failed to write {}: {}", file.display(), e))?;
                        println!("{} {}", "Formatted:".green(), file.display());
                    }
                    outcome.changed.push(file.clone());
                }
            }
            Err(e) => {
                outcome.errors.push((file.clone(), e.to_string()));
            }
        }
    }

    Ok(outcome)
}

fn run_fmt(
    path: &PathBuf,
    config: &FormatConfig,
    check: bool,
    show_diff: bool,
    recursive: bool,
) -> Result<(), String> {
    let files = if path.is_file() {
        vec![path.clone()]
    } else if recursive {
        find_template_files_recursive(path)?
    } else {
        find_template_files_in_dir(path)?
    };

    if files.is_empty() {
        println!("{}", "No template files found.".yellow());
        return Ok(());
    }
    debug!("Formatting {} file(s)", files.len());

    let FmtOutcome { changed, errors } = format_files(&files, config, check, show_diff)?;

    // Print summary
    if check {
        if changed.is_empty() && errors.is_empty() {
            println!("{}", "All files are properly formatted.".green());
            Ok(())
        } else {
            if !changed.is_empty() {
                println!("{}", "The following files need formatting:".yellow());
                for file in &changed {
                    println!("  {}", file.display());
                }
            }
            for (file, err) in &errors {
                eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
            }
            Err("Some files are not properly formatted".to_string())
        }
    } else if !errors.is_empty() {
        for (file, err) in &errors {
            eprintln!("{} {}: {}", "Error:".red(), file.display(), err);
        }
        Err("Some files had formatting errors".to_string())
    } else {
        let count = changed.len();
        if count > 0 {
            println!("{}", format!("Formatted {} file(s).", count).green().bold());
        } else {
            println!("{}", "All files are already properly formatted.".green());
        }
        Ok(())
    }
}

fn is_template_file(path: &Path) -> bool {
    TemplateFormat::from_path(path).is_some()
}

fn find_template_files_recursive(dir: &PathBuf) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    collect_template_files_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_template_files_recursive(dir: &PathBuf, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();

        if path.is_dir() {
            // Skip hidden directories and common non-source directories
            let name = path.file_name().unwrap_or_default().to_string_lossy();
            if !name.starts_with('.') && name != "target" && name != "node_modules" {
                collect_template_files_recursive(&path, files)?;
            }
        } else if is_template_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn find_template_files_in_dir(dir: &PathBuf) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| e.to_string())?;
        let path = entry.path();
        if path.is_file() && is_template_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn print_diff(file: &Path, original: &str, formatted: &str) {
    println!("\n{} {}:", "Diff for".cyan().bold(), file.display());

    let diff = TextDiff::from_lines(original, formatted);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        print!("{}{}", sign, change);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const QUEUE_TEMPLATE: &str = r#"
Parameters:
  Env:
    Type: String
Resources:
  Key:
    Type: AWS::KMS::Key
  Queue:
    Type: AWS::SQS::Queue
    Properties:
      QueueName: !Sub "${Env}-jobs"
      KmsMasterKeyId: !GetAtt Key.Arn
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_validate_template_combines_lint_and_typed_checks() {
        let template = Template::from_yaml_str(
            "Resources:\n  Queue:\n    Type: AWS::SQS::Queue\n    Properties:\n      DelaySeconds: !Ref Missing\n      Visibility: 30\n",
        )
        .unwrap();
        let diagnostics = validate_template(&template);
        let errors: Vec<_> = diagnostics.iter().filter(|d| d.is_error()).collect();

        assert_eq!(errors.len(), 2);
        assert!(errors[0].message.contains("Missing"));
        assert_eq!(errors[1].path, "Resources.Queue.Properties");
        assert!(errors[1].message.contains("unknown field `Visibility`"));
    }

    #[test]
    fn test_validate_file() {
        let dir = TempDir::new().unwrap();
        let valid = write(&dir, "valid.yaml", QUEUE_TEMPLATE);
        assert!(run_validate(&valid).is_ok());

        let invalid = write(
            &dir,
            "invalid.json",
            r#"{"Resources": {"Role": {"Type": "AWS::IAM::Role"}}}"#,
        );
        let err = run_validate(&invalid).unwrap_err();
        assert!(err.starts_with("1 error(s) found"));

        let missing = dir.path().join("missing.yaml");
        assert!(run_validate(&missing).unwrap_err().starts_with("Failed to load"));
    }

    #[test]
    fn test_deployment_order() {
        let template = Template::from_yaml_str(QUEUE_TEMPLATE).unwrap();
        assert_eq!(deployment_order(&template).unwrap(), vec!["Key", "Queue"]);

        let cyclic = Template::from_yaml_str(
            "Resources:\n  A:\n    Type: AWS::SNS::Topic\n    DependsOn: B\n  B:\n    Type: AWS::SNS::Topic\n    DependsOn: A\n",
        )
        .unwrap();
        assert_eq!(
            deployment_order(&cyclic).unwrap_err(),
            "Circular dependency: A -> B -> A"
        );
    }

    #[test]
    fn test_fmt_rewrites_and_checks() {
        let dir = TempDir::new().unwrap();
        let file = write(
            &dir,
            "stack.json",
            r#"{"Resources":{"Topic":{"Type":"AWS::SNS::Topic"}}}"#,
        );
        let config = FormatConfig::default();

        assert!(run_fmt(&file, &config, true, false, false).is_err());
        assert!(run_fmt(&file, &config, false, false, false).is_ok());
        assert!(run_fmt(&file, &config, true, false, false).is_ok());

        let content = fs::read_to_string(&file).unwrap();
        assert!(content.starts_with("{\n  \"Resources\": {\n"));
    }

    #[test]
    fn test_fmt_reports_unparsable_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "broken.json", "{\"Resources\": ");
        let path = dir.path().to_path_buf();
        let err = run_fmt(&path, &FormatConfig::default(), false, false, false).unwrap_err();
        assert_eq!(err, "Some files had formatting errors");
    }

    #[test]
    fn test_fmt_leaves_commented_yaml_untouched() {
        let dir = TempDir::new().unwrap();
        let source = "# owner: team-a\nResources:\n  T:\n    Type: AWS::SNS::Topic\n";
        let file = write(&dir, "stack.yaml", source);

        let err = run_fmt(&file, &FormatConfig::default(), false, false, false).unwrap_err();
        assert_eq!(err, "Some files had formatting errors");
        assert_eq!(fs::read_to_string(&file).unwrap(), source);
    }

    #[test]
    fn test_find_template_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.yaml", "Resources: {}\n");
        write(&dir, "b.json", "{}");
        write(&dir, "notes.txt", "");
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("c.yml"), "Resources: {}\n").unwrap();
        fs::create_dir(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".hidden").join("d.yaml"), "").unwrap();

        let root = dir.path().to_path_buf();
        let flat = find_template_files_in_dir(&root).unwrap();
        assert_eq!(flat.len(), 2);

        let recursive = find_template_files_recursive(&root).unwrap();
        assert_eq!(recursive.len(), 3);
        assert!(recursive.iter().any(|p| p.ends_with("nested/c.yml")));
    }
}

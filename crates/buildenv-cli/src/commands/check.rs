use std::path::Path;

use buildenv_core::{ModelResult, ValidationPolicy};
use buildenv_model::{load_environment, ProjectEnvironment, Validate};
use tracing::{debug, info};

use crate::output::{format_optional, Logger};

/// Execute the check command
pub fn execute(path: &Path, policy: &ValidationPolicy, logger: &Logger) -> ModelResult<()> {
    debug!("Checking environment document {}", path.display());

    let env = load_environment(path)?;
    env.validate_with(policy)?;
    info!("Environment document {} is valid", path.display());

    logger.header(&format!("Build environment: {}", path.display()));
    for (label, value) in summary(&env) {
        logger.info(label, value);
    }

    if !env.environment_variables().is_empty() {
        logger.section("Environment variables");
        for variable in env.environment_variables() {
            let kind = variable.variable_type().map(|t| t.as_str()).unwrap_or("PLAINTEXT");
            logger.item(format!("{} ({})", variable.name(), kind));
        }
    }

    logger.success("Environment is valid");
    Ok(())
}

/// Labelled top-level fields of an environment
pub fn summary(env: &ProjectEnvironment) -> Vec<(&'static str, String)> {
    vec![
        ("Type", env.environment_type().to_string()),
        ("Image", env.image().to_string()),
        ("Compute type", env.compute_type().to_string()),
        (
            "Compute configuration",
            format_optional(env.compute_configuration().map(|c| {
                format!(
                    "vCpu={} memory={} disk={}",
                    format_optional(c.v_cpu()),
                    format_optional(c.memory()),
                    format_optional(c.disk())
                )
            })),
        ),
        ("Fleet", format_optional(env.fleet().and_then(|f| f.fleet_arn()))),
        ("Privileged mode", format_optional(env.privileged_mode())),
        ("Certificate", format_optional(env.certificate())),
        (
            "Registry credential",
            format_optional(env.registry_credential().map(|r| r.credential())),
        ),
        (
            "Image pull credentials",
            format_optional(env.image_pull_credentials_type()),
        ),
        (
            "Docker server",
            format_optional(env.docker_server().map(|d| d.compute_type())),
        ),
    ]
}

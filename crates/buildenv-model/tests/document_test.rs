use buildenv_model::{load_environment, EnvironmentVariableType, ModelError, Validate, ValidationPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_json_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.json");
    fs::write(
        &path,
        r#"{
            "type": "LINUX_CONTAINER",
            "image": "aws/codebuild/standard:4.0",
            "computeType": "BUILD_GENERAL1_SMALL",
            "environmentVariables": [
                { "name": "TOKEN", "value": "/ci/token", "type": "PARAMETER_STORE" },
                { "name": "TOKEN", "value": "plain" }
            ]
        }"#,
    )
    .unwrap();

    let env = load_environment(&path).unwrap();
    assert_eq!(env.environment_variables().len(), 2);
    let token = env.environment_variable("TOKEN").unwrap();
    assert_eq!(token.value(), "plain");
    assert_eq!(
        env.environment_variables()[0].variable_type(),
        Some(&EnvironmentVariableType::ParameterStore)
    );
}

#[test]
fn test_load_toml_document_with_nested_tables() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.toml");
    fs::write(
        &path,
        r#"
type = "LINUX_EC2"
image = "aws/codebuild/amazonlinux-x86_64-standard:5.0"
computeType = "ATTRIBUTE_BASED_COMPUTE"

[computeConfiguration]
vCpu = 4
memory = 8
machineType = "GENERAL"

[dockerServer]
computeType = "BUILD_GENERAL1_MEDIUM"
securityGroupIds = ["sg-123"]
"#,
    )
    .unwrap();

    let env = load_environment(&path).unwrap();
    let config = env.compute_configuration().unwrap();
    assert_eq!(config.v_cpu(), Some(4));
    assert_eq!(config.disk(), None);
    assert_eq!(env.docker_server().unwrap().security_group_ids(), ["sg-123".to_string()]);
    assert!(env.validate_with(&ValidationPolicy::strict()).is_ok());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_environment(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io(_)));
}

#[test]
fn test_load_document_missing_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.toml");
    fs::write(&path, "type = \"LINUX_CONTAINER\"\nimage = \"img\"\n").unwrap();

    let err = load_environment(&path).unwrap_err();
    assert_eq!(err, ModelError::missing("ProjectEnvironment", "computeType"));
}

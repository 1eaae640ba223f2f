//! Integration tests for stackplan-adapters.
//!
//! Wires the real adapters into the core services and renders a stack from
//! files on disk.

use std::{fs, path::Path};

use serde_json::Value;
use stackplan_adapters::{
    DirectoryAssetLoader, LocalFilesystem, LocalTemplateSource, MemoryFilesystem,
    MemoryTemplateSource, SimpleRenderer, YamlDescriptionLoader,
};
use stackplan_core::{
    application::{ApplicationError, PlanService, StackService, StackTemplateOptions},
    domain::{AssetName, PlanRule, compaction},
    error::StackplanError,
};
use tempfile::TempDir;

const DESCRIPTION: &str = "\
clusterName: prod
externalDNSName: k8s.example.com
keyName: ops
region: us-west-2
availabilityZone: us-west-2a
workerCount: 2
";

const STACK_TEMPLATE: &str = r#"{
  "Description": "{{ ClusterName }} cluster",
  "Parameters": { "Workers": {{ WorkerCount }} },
  "Controller": { "UserData": "{{ UserDataController }}", "IP": "{{ ControllerIP }}" },
  "Worker": { "UserData": "{{ UserDataWorker }}" }
}
"#;

const WORKER_TEMPLATE: &str = "#cloud-config\netcd: {{ ETCDEndpoints }}\nca: {{ TLSConfig.CACert }}\n";
const CONTROLLER_TEMPLATE: &str = "#cloud-config\napi: {{ .SecureAPIServers }}\n";

fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    fs::write(root.join("cluster.yaml"), DESCRIPTION).unwrap();
    fs::create_dir_all(root.join("credentials")).unwrap();
    for name in AssetName::ALL {
        fs::write(root.join("credentials").join(name.file_name()), format!("pem {name}")).unwrap();
    }
    fs::create_dir_all(root.join("userdata")).unwrap();
    fs::write(root.join("userdata/cloud-config-worker"), WORKER_TEMPLATE).unwrap();
    fs::write(root.join("userdata/cloud-config-controller"), CONTROLLER_TEMPLATE).unwrap();
    fs::write(root.join("stack-template.json"), STACK_TEMPLATE).unwrap();
    temp
}

fn opts(root: &Path) -> StackTemplateOptions {
    StackTemplateOptions {
        assets_dir: root.join("credentials"),
        controller_template: root.join("userdata/cloud-config-controller"),
        worker_template: root.join("userdata/cloud-config-worker"),
        stack_template: root.join("stack-template.json"),
        ami: None,
    }
}

fn plan() -> PlanService {
    PlanService::new(
        Box::new(YamlDescriptionLoader::new()),
        Box::new(DirectoryAssetLoader::new()),
    )
}

fn local_service() -> StackService {
    StackService::new(
        plan(),
        Box::new(LocalTemplateSource::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

fn decode(value: &Value) -> String {
    let bytes = compaction::decompress("test", value.as_str().unwrap()).unwrap();
    String::from_utf8(bytes).unwrap()
}

#[test]
fn renders_stack_from_disk() {
    let temp = workspace();
    let root = temp.path();

    let stack = local_service()
        .render_stack(&root.join("cluster.yaml"), &opts(root))
        .unwrap();
    let text = String::from_utf8(stack).unwrap();
    assert!(!text.contains('\n'));

    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["Description"], "prod cluster");
    assert_eq!(value["Parameters"]["Workers"], 2);
    assert_eq!(value["Controller"]["IP"], "10.0.0.50");

    let worker = decode(&value["Worker"]["UserData"]);
    assert!(worker.contains("etcd: http://10.0.0.50:2379"));
    let ca_line = worker.lines().find(|l| l.starts_with("ca: ")).unwrap();
    let ca = compaction::decompress("ca", &ca_line[4..]).unwrap();
    assert_eq!(ca, b"pem ca.pem");

    let controller = decode(&value["Controller"]["UserData"]);
    assert_eq!(controller, "#cloud-config\napi: https://10.0.0.50:443\n");
}

#[test]
fn key_order_survives_minification() {
    let temp = workspace();
    let root = temp.path();

    let stack = local_service()
        .render_stack(&root.join("cluster.yaml"), &opts(root))
        .unwrap();
    let text = String::from_utf8(stack).unwrap();

    let description = text.find("\"Description\"").unwrap();
    let parameters = text.find("\"Parameters\"").unwrap();
    let worker = text.find("\"Worker\"").unwrap();
    assert!(description < parameters && parameters < worker);
}

#[test]
fn invalid_plan_stops_before_assets() {
    let temp = workspace();
    let root = temp.path();
    fs::write(
        root.join("cluster.yaml"),
        format!("{DESCRIPTION}podCIDR: 10.0.128.0/17\n"),
    )
    .unwrap();
    fs::remove_dir_all(root.join("credentials")).unwrap();

    let err = local_service()
        .render_stack(&root.join("cluster.yaml"), &opts(root))
        .unwrap_err();
    assert_eq!(err.plan_rule(), Some(PlanRule::PodRangeOverlapsVpc));
}

#[test]
fn missing_asset_file_is_reported() {
    let temp = workspace();
    let root = temp.path();
    fs::remove_file(root.join("credentials/apiserver-key.pem")).unwrap();

    let err = local_service()
        .render_stack(&root.join("cluster.yaml"), &opts(root))
        .unwrap_err();
    assert!(matches!(
        err,
        StackplanError::Application(ApplicationError::AssetLoadFailed { .. })
    ));
    assert!(err.to_string().contains("apiserver-key.pem"));
}

#[test]
fn export_writes_through_memory_filesystem() {
    let temp = workspace();
    let root = temp.path();
    let opts = opts(root);

    let templates = MemoryTemplateSource::new()
        .with_template(&opts.worker_template, "w")
        .with_template(&opts.controller_template, "c")
        .with_template(&opts.stack_template, r#"{ "W": "{{ UserDataWorker }}" }"#);
    let fs = MemoryFilesystem::new();
    let service = StackService::new(
        plan(),
        Box::new(templates),
        Box::new(SimpleRenderer::new()),
        Box::new(fs.clone()),
    );

    let output = Path::new("/out/stack.json");
    service
        .export_stack(&root.join("cluster.yaml"), &opts, output, false)
        .unwrap();
    let written = fs.read_file(output).unwrap();
    assert!(written.starts_with(b"{\"W\":\""));

    let err = service
        .export_stack(&root.join("cluster.yaml"), &opts, output, false)
        .unwrap_err();
    assert!(matches!(
        err,
        StackplanError::Application(ApplicationError::OutputExists { .. })
    ));
}

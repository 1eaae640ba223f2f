//! Stack Service - main application orchestrator.
//!
//! This service coordinates the entire rendering workflow:
//! 1. Validate and resolve the cluster description (via [`PlanService`])
//! 2. Render one bootstrap document per compute role, then compress it
//! 3. Render the stack template with the resolved config and user data
//! 4. Minify the rendered stack
//! 5. Optionally write it through the filesystem port
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::{Path, PathBuf};

use serde::de::IgnoredAny;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError, PlanService,
        ports::{Filesystem, TemplateRenderer, TemplateSource},
    },
    domain::{ResolvedConfig, Role, compaction},
    error::{StackplanError, StackplanResult},
};

/// Where the inputs of one rendering request live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTemplateOptions {
    pub assets_dir: PathBuf,
    pub controller_template: PathBuf,
    pub worker_template: PathBuf,
    pub stack_template: PathBuf,
    /// Published as `AMI` in place of the description's value when set.
    pub ami: Option<String>,
}

impl StackTemplateOptions {
    fn role_template(&self, role: Role) -> &Path {
        match role {
            Role::Controller => &self.controller_template,
            Role::Worker => &self.worker_template,
        }
    }
}

/// Main rendering service.
pub struct StackService {
    plan: PlanService,
    templates: Box<dyn TemplateSource>,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl StackService {
    /// Create a new stack service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use stackplan_core::application::{PlanService, StackService};
    ///
    /// let service = StackService::new(
    ///     PlanService::new(descriptions, assets),
    ///     templates,  // impl TemplateSource
    ///     renderer,   // impl TemplateRenderer
    ///     filesystem, // impl Filesystem
    /// );
    /// ```
    pub fn new(
        plan: PlanService,
        templates: Box<dyn TemplateSource>,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            plan,
            templates,
            renderer,
            filesystem,
        }
    }

    /// The plan service this stack service resolves through.
    pub fn plan(&self) -> &PlanService {
        &self.plan
    }

    /// Render the stack template for the description at `description_path`.
    ///
    /// Returns the whitespace-minimized stack document.
    #[instrument(
        skip_all,
        fields(
            description = %description_path.display(),
            stack_template = %opts.stack_template.display()
        )
    )]
    pub fn render_stack(
        &self,
        description_path: &Path,
        opts: &StackTemplateOptions,
    ) -> StackplanResult<Vec<u8>> {
        let mut config = self.plan.resolve(description_path, &opts.assets_dir)?;
        if let Some(ami) = &opts.ami {
            config = config.with_ami(ami.as_str());
        }
        info!(cluster = %config.cluster().cluster_name, "Cluster config resolved");

        let mut data = render_data(&config)?;

        // Role documents see the resolved config only, not each other.
        let mut user_data = Vec::with_capacity(2);
        for role in [Role::Worker, Role::Controller] {
            let encoded = self.render_user_data(role, opts.role_template(role), &data)?;
            user_data.push((role.user_data_key(), encoded));
        }
        if let Value::Object(map) = &mut data {
            for (key, encoded) in user_data {
                map.insert(key.to_string(), Value::String(encoded));
            }
        }

        let rendered = self.render_file(&opts.stack_template, &data)?;
        let minified = minify_json(&opts.stack_template, &rendered)?;
        info!(bytes = minified.len(), "Stack template rendered");
        Ok(minified)
    }

    /// Render the stack and write it to `output`.
    ///
    /// Refuses to replace an existing file unless `force` is set. Returns the
    /// number of bytes written.
    #[instrument(skip_all, fields(output = %output.display(), force))]
    pub fn export_stack(
        &self,
        description_path: &Path,
        opts: &StackTemplateOptions,
        output: &Path,
        force: bool,
    ) -> StackplanResult<usize> {
        if !force && self.filesystem.exists(output) {
            return Err(ApplicationError::OutputExists {
                path: output.to_path_buf(),
            }
            .into());
        }

        let stack = self.render_stack(description_path, opts)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(output, &stack)?;

        info!("Stack template written");
        Ok(stack.len())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn render_user_data(&self, role: Role, template: &Path, data: &Value) -> StackplanResult<String> {
        let rendered = self.render_file(template, data)?;
        debug!(%role, bytes = rendered.len(), "Bootstrap document rendered");
        compaction::compress(&format!("{role} user data"), rendered.as_bytes())
            .map_err(StackplanError::Domain)
    }

    fn render_file(&self, template: &Path, data: &Value) -> StackplanResult<String> {
        let text = self.templates.read(template)?;
        self.renderer
            .render(&template.display().to_string(), &text, data)
    }
}

/// The rendering data object for `config`.
fn render_data(config: &ResolvedConfig) -> StackplanResult<Value> {
    serde_json::to_value(config).map_err(|e| {
        ApplicationError::RenderingFailed {
            template: "rendering data".into(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Check that `rendered` is JSON and drop its insignificant whitespace.
///
/// Everything else is kept byte for byte: number spellings, string escapes,
/// key order and repeated keys.
fn minify_json(template: &Path, rendered: &str) -> StackplanResult<Vec<u8>> {
    serde_json::from_str::<IgnoredAny>(rendered).map_err(|e| {
        StackplanError::from(ApplicationError::RenderingFailed {
            template: template.display().to_string(),
            reason: format!("rendered stack is not valid JSON: {e}"),
        })
    })?;
    Ok(strip_whitespace(rendered).into_bytes())
}

/// Remove whitespace outside string literals. `json` must be valid JSON.
fn strip_whitespace(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;
    for c in json.chars() {
        if in_string {
            out.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
        } else if !matches!(c, ' ' | '\t' | '\n' | '\r') {
            in_string = c == '"';
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::{
        MockAssetSource, MockDescriptionSource, MockFilesystem, MockTemplateRenderer,
        MockTemplateSource,
    };
    use crate::domain::{AssetName, ClusterDescription, SecurityAssetBundle};

    fn described() -> ClusterDescription {
        ClusterDescription {
            external_dns_name: "k8s.example.com".into(),
            key_name: "ops".into(),
            region: "us-west-2".into(),
            availability_zone: "us-west-2a".into(),
            ..ClusterDescription::default()
        }
    }

    fn plan_service() -> PlanService {
        let mut descriptions = MockDescriptionSource::new();
        descriptions.expect_load().returning(|_| Ok(described()));
        let mut assets = MockAssetSource::new();
        assets.expect_load().returning(|_| {
            Ok(AssetName::ALL
                .into_iter()
                .map(|n| (n, b"pem".to_vec()))
                .collect::<SecurityAssetBundle>())
        });
        PlanService::new(Box::new(descriptions), Box::new(assets))
    }

    fn opts() -> StackTemplateOptions {
        StackTemplateOptions {
            assets_dir: "credentials".into(),
            controller_template: "userdata/cloud-config-controller".into(),
            worker_template: "userdata/cloud-config-worker".into(),
            stack_template: "stack-template.json".into(),
            ami: None,
        }
    }

    /// Template source that returns the path itself as the template text.
    fn echo_templates() -> MockTemplateSource {
        let mut templates = MockTemplateSource::new();
        templates
            .expect_read()
            .returning(|p| Ok(p.display().to_string()));
        templates
    }

    /// Renderer: role templates render to a marker string, the stack template
    /// renders to a JSON document that echoes the injected user data.
    fn fake_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|name, _, data| {
            if name.ends_with("stack-template.json") {
                Ok(format!(
                    "{{\n  \"Worker\": \"{}\",\n  \"Controller\": \"{}\",\n  \"Api\": \"{}\",\n  \"Image\": \"{}\"\n}}\n",
                    data["UserDataWorker"].as_str().unwrap_or(""),
                    data["UserDataController"].as_str().unwrap_or(""),
                    data["APIServerEndpoint"].as_str().unwrap_or(""),
                    data["AMI"].as_str().unwrap_or("missing"),
                ))
            } else {
                assert!(data.get("UserDataWorker").is_none());
                Ok(format!("#cloud-config for {name}"))
            }
        });
        renderer
    }

    fn service(filesystem: MockFilesystem) -> StackService {
        StackService::new(
            plan_service(),
            Box::new(echo_templates()),
            Box::new(fake_renderer()),
            Box::new(filesystem),
        )
    }

    #[test]
    fn render_stack_minifies_and_embeds_compressed_user_data() {
        let out = service(MockFilesystem::new())
            .render_stack(Path::new("cluster.yaml"), &opts())
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains('\n'));
        assert!(!text.contains(": "));
        assert!(text.starts_with("{\"Worker\":"));

        let value: Value = serde_json::from_str(&text).unwrap();
        let worker = compaction::decompress("w", value["Worker"].as_str().unwrap()).unwrap();
        assert_eq!(
            String::from_utf8(worker).unwrap(),
            "#cloud-config for userdata/cloud-config-worker"
        );
        assert_eq!(value["Api"], "https://k8s.example.com");
        assert_eq!(value["Image"], "");
    }

    #[test]
    fn ami_option_overrides_description() {
        let opts = StackTemplateOptions {
            ami: Some("ami-0123abcd".into()),
            ..opts()
        };
        let out = service(MockFilesystem::new())
            .render_stack(Path::new("cluster.yaml"), &opts)
            .unwrap();
        let value: Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["Image"], "ami-0123abcd");
    }

    #[test]
    fn minify_keeps_literal_text() {
        let rendered = r#"{ "Size": 1e3, "Big": 123456789012345678901234, "Esc": "a\/b <", "Dup": 1, "Dup": 2 }"#;
        let out = minify_json(Path::new("t.json"), rendered).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"{"Size":1e3,"Big":123456789012345678901234,"Esc":"a\/b <","Dup":1,"Dup":2}"#
        );
    }

    #[test]
    fn minify_leaves_string_contents_alone() {
        let rendered = "{\n  \"Cmd\" : \"echo  \\\"a b\\\" \",\n  \"List\": [ 1,\t2 ]\r\n}\n";
        let out = minify_json(Path::new("t.json"), rendered).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"Cmd\":\"echo  \\\"a b\\\" \",\"List\":[1,2]}"
        );
    }

    #[test]
    fn minify_rejects_trailing_text() {
        let err = minify_json(Path::new("t.json"), "{} extra").unwrap_err();
        assert!(matches!(
            err,
            StackplanError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn render_stack_rejects_non_json_output() {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render()
            .returning(|_, _, _| Ok("Resources: not json".into()));
        let service = StackService::new(
            plan_service(),
            Box::new(echo_templates()),
            Box::new(renderer),
            Box::new(MockFilesystem::new()),
        );

        let err = service
            .render_stack(Path::new("cluster.yaml"), &opts())
            .unwrap_err();
        assert!(matches!(
            err,
            StackplanError::Application(ApplicationError::RenderingFailed { .. })
        ));
    }

    #[test]
    fn template_read_failure_propagates() {
        let mut templates = MockTemplateSource::new();
        templates.expect_read().returning(|p| {
            Err(ApplicationError::TemplateReadFailed {
                path: p.to_path_buf(),
                reason: "missing".into(),
            }
            .into())
        });
        let service = StackService::new(
            plan_service(),
            Box::new(templates),
            Box::new(MockTemplateRenderer::new()),
            Box::new(MockFilesystem::new()),
        );

        let err = service
            .render_stack(Path::new("cluster.yaml"), &opts())
            .unwrap_err();
        assert!(matches!(
            err,
            StackplanError::Application(ApplicationError::TemplateReadFailed { .. })
        ));
    }

    #[test]
    fn export_refuses_existing_output() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();

        let err = service(fs)
            .export_stack(
                Path::new("cluster.yaml"),
                &opts(),
                Path::new("out/stack.json"),
                false,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            StackplanError::Application(ApplicationError::OutputExists { .. })
        ));
    }

    #[test]
    fn export_with_force_writes_through_filesystem() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_create_dir_all()
            .withf(|p| p.ends_with("out"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, content| p.ends_with("stack.json") && content.starts_with(b"{"))
            .times(1)
            .returning(|_, _| Ok(()));

        let written = service(fs)
            .export_stack(
                Path::new("cluster.yaml"),
                &opts(),
                Path::new("out/stack.json"),
                true,
            )
            .unwrap();
        assert!(written > 0);
    }
}

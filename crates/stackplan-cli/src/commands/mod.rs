//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod init;
pub mod render;
pub mod validate;

use stackplan_adapters::{
    DirectoryAssetLoader, LocalFilesystem, LocalTemplateSource, SimpleRenderer,
    YamlDescriptionLoader,
};
use stackplan_core::application::{PlanService, StackService};

/// Plan service wired to the local adapters.
pub(crate) fn plan_service() -> PlanService {
    PlanService::new(
        Box::new(YamlDescriptionLoader::new()),
        Box::new(DirectoryAssetLoader::new()),
    )
}

/// Stack service wired to the local adapters.
pub(crate) fn stack_service() -> StackService {
    StackService::new(
        plan_service(),
        Box::new(LocalTemplateSource::new()),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    )
}

//! `stackplan validate`: run the address plan check on a description.

use serde_json::json;
use tracing::instrument;

use stackplan_core::domain::{AddressPlan, ClusterDescription};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let (description, plan) = super::plan_service()
        .validate(&args.file)
        .with_cli_context(|| "validating description")?;

    if output.format() == OutputFormat::Json {
        output.json(&report(&description, &plan))?;
        return Ok(());
    }

    output.success(&format!(
        "Cluster '{}' has a valid address plan",
        description.cluster_name
    ))?;
    output.field("VPC", &plan.vpc.to_string())?;
    output.field("Instances", &plan.instances.to_string())?;
    output.field("Controller", &plan.controller.to_string())?;
    output.field("Pods", &plan.pods.to_string())?;
    output.field("Services", &plan.services.to_string())?;
    output.field("API service", &plan.kubernetes_service.to_string())?;
    output.field("DNS service", &plan.dns_service.to_string())?;
    Ok(())
}

fn report(description: &ClusterDescription, plan: &AddressPlan) -> serde_json::Value {
    json!({
        "valid": true,
        "clusterName": description.cluster_name,
        "vpcCIDR": plan.vpc.to_string(),
        "instanceCIDR": plan.instances.to_string(),
        "controllerIP": plan.controller.to_string(),
        "podCIDR": plan.pods.to_string(),
        "serviceCIDR": plan.services.to_string(),
        "kubernetesServiceIP": plan.kubernetes_service.to_string(),
        "dnsServiceIP": plan.dns_service.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use stackplan_core::domain::AddressPlanValidator;

    #[test]
    fn report_uses_document_keys() {
        let description = ClusterDescription {
            external_dns_name: "k8s.example.com".into(),
            key_name: "ops".into(),
            region: "us-west-2".into(),
            availability_zone: "us-west-2a".into(),
            ..ClusterDescription::default()
        };
        let plan = AddressPlanValidator::validate(&description).unwrap();
        let r = report(&description, &plan);

        assert_eq!(r["valid"], true);
        assert_eq!(r["podCIDR"], "10.2.0.0/16");
        assert_eq!(r["dnsServiceIP"], "10.3.0.10");
    }
}

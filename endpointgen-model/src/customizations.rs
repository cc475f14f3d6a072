//! Built-in corrections applied to a decoded partition.
//!
//! The published endpoints model lags behind what the services actually
//! serve in a few places. These fixes run after decoding unless
//! [`DecodeModelOptions::skip_customizations`](crate::DecodeModelOptions) is set.

use crate::types::{CredentialScope, DefaultKey, Endpoint, EndpointKey, Partition};

const AWS_GLOBAL: &str = "aws-global";
const US_EAST_1: &str = "us-east-1";
const APP_AUTOSCALING: &str = "application-autoscaling";
const APP_AUTOSCALING_HOSTNAME: &str = "autoscaling.{region}.amazonaws.com";

/// Applies every customization to the partition, in order.
pub fn apply(partition: &mut Partition) {
    regional_s3(partition);
    remove_iot_data_service(partition);
    fix_app_autoscaling_china(partition);
    fix_app_autoscaling_us_gov(partition);
}

/// Gives S3 in the `aws` partition an explicit global endpoint.
pub fn regional_s3(partition: &mut Partition) {
    if partition.id != "aws" {
        return;
    }
    let Some(service) = partition.services.get_mut("s3") else {
        return;
    };
    if service.endpoints.contains_key(&EndpointKey::new(AWS_GLOBAL)) {
        return;
    }

    service.partition_endpoint = AWS_GLOBAL.to_string();
    service
        .endpoints
        .entry(EndpointKey::new(US_EAST_1))
        .or_default();
    service.endpoints.insert(
        EndpointKey::new(AWS_GLOBAL),
        Endpoint {
            hostname: "s3.amazonaws.com".to_string(),
            credential_scope: CredentialScope {
                region: US_EAST_1.to_string(),
                service: String::new(),
            },
            ..Endpoint::default()
        },
    );
}

/// Drops the `data.iot` service, which has no usable regional endpoints.
pub fn remove_iot_data_service(partition: &mut Partition) {
    partition.services.remove("data.iot");
}

/// Points application autoscaling in `aws-cn` at the `.cn` domain.
pub fn fix_app_autoscaling_china(partition: &mut Partition) {
    if partition.id != "aws-cn" {
        return;
    }
    let Some(service) = partition.services.get_mut(APP_AUTOSCALING) else {
        return;
    };

    match service.defaults.get_mut(&DefaultKey::default()) {
        Some(defaults) if defaults.hostname == APP_AUTOSCALING_HOSTNAME => {
            defaults.hostname = format!("{APP_AUTOSCALING_HOSTNAME}.cn");
        }
        other => {
            let actual = other.map_or("", |d| d.hostname.as_str());
            tracing::warn!(
                expected = APP_AUTOSCALING_HOSTNAME,
                actual,
                "skipping application-autoscaling China customization"
            );
        }
    }
}

/// Gives application autoscaling in `aws-us-gov` its hostname and signing name.
pub fn fix_app_autoscaling_us_gov(partition: &mut Partition) {
    if partition.id != "aws-us-gov" {
        return;
    }
    let Some(service) = partition.services.get_mut(APP_AUTOSCALING) else {
        return;
    };

    let defaults = service.defaults.entry(DefaultKey::default()).or_default();
    if !defaults.credential_scope.service.is_empty() {
        tracing::warn!(
            actual = %defaults.credential_scope.service,
            "skipping application-autoscaling GovCloud customization, credential scope service already set"
        );
        return;
    }
    if !defaults.hostname.is_empty() {
        tracing::warn!(
            actual = %defaults.hostname,
            "skipping application-autoscaling GovCloud customization, hostname already set"
        );
        return;
    }

    defaults.credential_scope.service = APP_AUTOSCALING.to_string();
    defaults.hostname = APP_AUTOSCALING_HOSTNAME.to_string();
}

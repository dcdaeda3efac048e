use crate::loader::{decode_document, read_file};
use gktest_client::{ConstraintKey, RuleClient};
use gktest_repo::FileProvider;
use gktest_types::{SuitePath, VerifyError};

/// Read a case's object and convert it to the JSON shape the Rule Client reviews.
pub(crate) fn read_object(
    fs: &dyn FileProvider,
    path: &SuitePath,
) -> Result<serde_json::Value, VerifyError> {
    let bytes = read_file(fs, path, VerifyError::InvalidCase)?;
    let value = decode_document(&bytes)
        .map_err(|detail| VerifyError::InvalidYaml(format!("{path}: {detail}")))?;
    serde_json::to_value(value)
        .map_err(|err| VerifyError::InvalidYaml(format!("{path}: {err}")))
}

/// Review one object against the test's constraint.
pub(crate) fn review(
    client: &dyn RuleClient,
    constraint: &ConstraintKey,
    object: &serde_json::Value,
) -> Result<Vec<String>, VerifyError> {
    client
        .review(constraint, object)
        .map_err(|err| VerifyError::ReviewingObject(format!("{constraint}: {err}")))
}

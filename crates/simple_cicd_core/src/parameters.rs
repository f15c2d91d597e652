use serde_json::{Map, Value};

use crate::contract::UserParameters;
use crate::error::{JobError, RequiredField};

/// Decodes the job's `UserParameters` string and validates the required keys.
///
/// The string must be a JSON object carrying non-empty `repo` and `branch`
/// strings. Other keys are ignored. `repo` is validated before `branch`.
pub fn decode_user_parameters(raw: Option<&str>) -> Result<UserParameters, JobError> {
    let raw = raw.ok_or(JobError::Decode)?;
    let decoded: Value = serde_json::from_str(raw).map_err(|_| JobError::Decode)?;
    let Value::Object(fields) = decoded else {
        return Err(JobError::Decode);
    };

    let repo = required_string(&fields, RequiredField::Repo)?;
    let branch = required_string(&fields, RequiredField::Branch)?;

    Ok(UserParameters { repo, branch })
}

fn required_string(fields: &Map<String, Value>, field: RequiredField) -> Result<String, JobError> {
    fields
        .get(field.key())
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(JobError::MissingField(field))
}

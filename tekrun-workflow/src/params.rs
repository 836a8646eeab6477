//! Parameter management

use std::collections::{HashMap, HashSet};

use tekrun_core::domain::pipeline_run::{Param, ParamValue};

use crate::workflow::Workflow;

impl Workflow {
    /// Parameters as a name to string-value map
    ///
    /// Duplicate names are not guarded against; the last one wins.
    pub fn parameters_as_map(&self) -> HashMap<String, String> {
        self.run
            .spec
            .params
            .iter()
            .map(|param| (param.name.clone(), param.value.as_str().to_string()))
            .collect()
    }

    /// Replaces the values of declared parameters
    ///
    /// Order and the set of parameter names are preserved. Names in `desired`
    /// that the template does not declare are dropped: this never introduces
    /// a new parameter.
    pub fn override_parameters(&mut self, desired: &HashMap<String, String>) {
        let params = self
            .run
            .spec
            .params
            .iter()
            .map(|current| match desired.get(&current.name) {
                Some(value) => Param {
                    name: current.name.clone(),
                    value: ParamValue::String(value.clone()),
                },
                None => current.clone(),
            })
            .collect();
        self.run.spec.params = params;
    }

    /// Logs a warning for every desired parameter the template does not declare
    ///
    /// Advisory only; never fails.
    pub fn verify_parameters(&self, desired: &HashMap<String, String>) {
        for name in self.unrecognized_parameters(desired) {
            tracing::warn!("Unrecognized input parameter: {}", name);
        }
    }

    /// Desired parameter names the template does not declare, sorted
    pub fn unrecognized_parameters(&self, desired: &HashMap<String, String>) -> Vec<String> {
        let declared: HashSet<&str> = self
            .run
            .spec
            .params
            .iter()
            .map(|param| param.name.as_str())
            .collect();

        let mut unknown: Vec<String> = desired
            .keys()
            .filter(|name| !declared.contains(name.as_str()))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }

    /// Sets the execution identity of the run
    pub fn set_service_account(&mut self, name: impl Into<String>) {
        self.run.spec.task_run_template.service_account_name = name.into();
    }
}

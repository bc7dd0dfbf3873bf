use crate::policy::PolicyConfig;
use modsync_types::{ids, Finding, ModInventory};
use serde_json::json;

pub fn run(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    if !policy.toggles.enforce_required {
        return;
    }

    for entry in &policy.required {
        if inventory.iter().any(|m| entry.matches(m)) {
            continue;
        }

        // A mod with the right id but the wrong version is worth naming in the payload.
        let installed = inventory
            .iter()
            .find(|m| m.id == entry.id)
            .map(|m| m.version.to_string());

        out.push(Finding {
            check_id: ids::CHECK_MODS_REQUIRED.to_string(),
            code: ids::CODE_MISSING_REQUIRED_MOD.to_string(),
            message: format!("missing required mod: {}", entry.id),
            subject: Some(entry.id.clone()),
            help: Some(format!("Install {} ({}).", entry.id, entry.range_label())),
            data: json!({
                "mod": entry.id,
                "required": entry.range_label(),
                "installed": installed,
            }),
        });
    }
}

use crate::policy::PolicyConfig;
use modsync_types::{ids, Finding, ModInventory};
use serde_json::json;

/// Whitelist check. Entries from the required list count as approved too.
pub fn run(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    if !policy.toggles.enforce_approved {
        return;
    }

    for reported in inventory {
        if policy.is_approved(reported) {
            continue;
        }

        out.push(Finding {
            check_id: ids::CHECK_MODS_APPROVED.to_string(),
            code: ids::CODE_UNAPPROVED_MOD.to_string(),
            message: format!("unapproved mod: {} {}", reported.id, reported.version),
            subject: Some(reported.id.clone()),
            help: Some(format!("Remove {} or ask an operator to approve it.", reported.id)),
            data: json!({
                "mod": reported.id,
                "version": reported.version.to_string(),
            }),
        });
    }
}

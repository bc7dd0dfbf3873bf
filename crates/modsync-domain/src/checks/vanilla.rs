use crate::policy::PolicyConfig;
use modsync_types::{ids, Finding, ModInventory};
use serde_json::Value;

pub fn run(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    if policy.toggles.allow_vanilla || !inventory.is_vanilla() {
        return;
    }

    out.push(Finding {
        check_id: ids::CHECK_PEER_VANILLA.to_string(),
        code: ids::CODE_VANILLA_DISALLOWED.to_string(),
        message: "vanilla players disallowed".to_string(),
        subject: None,
        help: Some("Install the server's required mods before connecting.".to_string()),
        data: Value::Null,
    });
}

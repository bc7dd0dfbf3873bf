use crate::policy::PolicyConfig;
use modsync_types::{Finding, ModInventory};

mod approved;
mod banned;
mod modded;
mod required;
mod vanilla;


/// Run the five checks in their fixed order.
pub fn run_all(inventory: &ModInventory, policy: &PolicyConfig, out: &mut Vec<Finding>) {
    vanilla::run(inventory, policy, out);
    modded::run(inventory, policy, out);
    required::run(inventory, policy, out);
    banned::run(inventory, policy, out);
    approved::run(inventory, policy, out);
}

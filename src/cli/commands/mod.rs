pub mod archive;
pub mod ledger;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in ledger::definitions()
        .into_iter()
        .chain(archive::definitions())
        .chain(system::definitions())
    {
        registry.register(entry);
    }
}

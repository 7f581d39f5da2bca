pub mod account;
pub mod amount;
pub mod cli;
pub mod consts;
pub mod date;
pub mod interpreter;
pub mod model;
pub mod store;

pub use account::{Account, AccountKind};
pub use amount::Amount;
pub use date::Date;
pub use interpreter::{CommandInterpreter, Outcome};
pub use model::{AccountType, Campus, Profile};
pub use store::AccountStore;

//! Tactical heuristics built generically over any [`tactics_core::BoardOracle`]:
//! legal-attacker enumeration, static exchange evaluation, tactical
//! predicates, and the mistake classifiers composed from them.

mod attackers;
mod mistakes;
mod notation;
mod see;
mod tactics;

pub use attackers::{attackers_of, lva};
pub use mistakes::{
    hanging_piece_not_captured, hung_fork, hung_mate_n, hung_mate_n_plus, hung_moved_piece,
    hung_other_piece, left_piece_hanging, missed_fork, missed_mate_n, missed_mate_n_plus,
    missed_sacrifice, started_bad_trade,
};
pub use notation::{moves_to_san_list, running_total, san_list_to_moves};
pub use see::{capture_exchange_eval, exchange_eval, move_captured_value};
pub use tactics::{can_be_captured, get_hanging_after_move, get_hanging_pieces, is_fork, is_forking_move, is_hanging};

pub mod stage1_aggregate;
pub mod stage2_reconcile;
pub mod stage3_scores;

pub mod stage2_normalize;
pub mod stage3_methods;
pub mod stage4_collect;
pub mod stage5_aggregate;
pub mod stage6_report;

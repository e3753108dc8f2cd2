pub mod analyze_spool;

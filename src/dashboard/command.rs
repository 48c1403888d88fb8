pub mod dashboard_cmd;

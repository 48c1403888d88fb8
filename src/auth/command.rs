pub mod login_cmd;
pub mod logout_cmd;
pub mod me_cmd;

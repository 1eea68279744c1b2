/// Holds the process group id of a running page. Dropping the guard sends
/// `SIGKILL` to the whole group.
#[derive(Debug)]
pub struct ProcessGroupGuard {
    pub(crate) pgid: Option<i32>,
}

use yew::prelude::*;

use crate::session::SessionHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardProps {
    /// Read once per activation to authorize the listing request.
    pub session: SessionHandle,
}

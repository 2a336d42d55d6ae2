use crate::{cmds::gist::Gist, Result};

/// Remote operations on the gists of a given user.
pub trait UserGists {
    /// Public gists of `username`, in the order the remote returns them.
    fn list_user_gists(&self, username: &str) -> Result<Vec<Gist>>;
}

use domain::profile::Profile;

use crate::errors::Error;
use crate::portal::Portal;

impl Portal {
    /// The current user's profile.
    pub async fn profile(&self) -> Result<Profile, Error> {
        self.api.get("/users/profile/").await
    }
}

//! Factory: the view gets a fully wired view model from an injector and
//! never sees the database or repository.

use itertools::Itertools;

use crate::config::Settings;
use crate::console::Console;
use crate::error::PatternError;

pub struct Database {
    users: Vec<String>,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            users: ["Sandy", "Vighu", "Dushy"].map(String::from).to_vec(),
        }
    }
}

pub struct UserRepository {
    users: Vec<String>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            users: database.users.clone(),
        }
    }
}

pub struct UserViewModel {
    users: Vec<String>,
}

impl UserViewModel {
    pub fn new(repository: &UserRepository) -> Self {
        Self {
            users: repository.users.clone(),
        }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }
}

/// Owns the knowledge of how the object graph is built.
pub struct InjectorUtils;

impl InjectorUtils {
    pub fn provide_user_view_model() -> UserViewModel {
        let database = Database::default();
        let repository = UserRepository::new(&database);
        UserViewModel::new(&repository)
    }
}

pub struct UserView {
    view_model: UserViewModel,
}

impl UserView {
    pub fn new() -> Self {
        Self {
            view_model: InjectorUtils::provide_user_view_model(),
        }
    }

    /// Test seam: any view model will do.
    pub fn with_view_model(view_model: UserViewModel) -> Self {
        Self { view_model }
    }

    pub fn display_users(&self, console: &Console) {
        console.say(format!("[{}]", self.view_model.users().iter().join(", ")));
    }
}

impl Default for UserView {
    fn default() -> Self {
        Self::new()
    }
}

pub fn demo(console: &Console, _settings: &Settings) -> Result<(), PatternError> {
    UserView::new().display_users(console);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injector_builds_full_graph() {
        let view_model = InjectorUtils::provide_user_view_model();
        assert_eq!(view_model.users(), ["Sandy", "Vighu", "Dushy"]);
    }

    #[test]
    fn test_view_with_substitute_model() {
        let console = Console::recording();
        let database = Database {
            users: vec!["Test".to_string()],
        };
        let view = UserView::with_view_model(UserViewModel::new(&UserRepository::new(&database)));

        view.display_users(&console);
        assert_eq!(console.lines(), vec!["[Test]"]);
    }

    #[test]
    fn test_demo_output() {
        let console = Console::recording();
        demo(&console, &Settings::default()).unwrap();
        assert_eq!(console.lines(), vec!["[Sandy, Vighu, Dushy]"]);
    }
}

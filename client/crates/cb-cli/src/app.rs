use crate::{
    AuthCommands, CliResult, Commands, CommentCommands, RecipeCommands, SavedCommands,
};

use std::sync::Arc;

use cb_api::Client;
use cb_core::{RecipeDraft, RecipeFilter, UserSession};
use cb_session::SessionManager;
use cb_store::{SavedListKind, SavedRecipes};
use log::info;
use serde_json::{Value, json};

/// Runs one command against a restored session.
pub struct App {
    session: Arc<SessionManager>,
}

impl App {
    pub fn new(session: Arc<SessionManager>) -> Self {
        Self { session }
    }

    pub async fn run(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Auth { action } => self.run_auth(action).await,
            Commands::Recipe { action } => self.run_recipe(action).await,
            Commands::Comment { action } => self.run_comment(action).await,
            Commands::Bookmark { action } => self.run_saved(SavedListKind::Bookmarks, action).await,
            Commands::Favorite { action } => self.run_saved(SavedListKind::Favorites, action).await,
            Commands::Chat { message } => {
                let reply = self.client()?.suggest(&message).await?;
                Ok(json!({ "reply": reply }))
            }
        }
    }

    fn client(&self) -> CliResult<Client> {
        Ok(Client::from_session(Arc::clone(&self.session))?)
    }

    async fn run_auth(&self, action: AuthCommands) -> CliResult<Value> {
        match action {
            AuthCommands::Login { email, password } => {
                let user = self.session.login(&email, &password).await?;
                Ok(user_json(&user))
            }
            AuthCommands::Register {
                username,
                email,
                password,
            } => {
                self.session.register(&username, &email, &password).await?;
                Ok(json!({ "message": "Registration successful. Please sign in." }))
            }
            AuthCommands::Logout => {
                self.session.logout().await?;
                Ok(json!({ "message": "Signed out" }))
            }
            AuthCommands::Whoami => Ok(match self.session.current() {
                Some(user) => json!({ "authenticated": true, "user": user_json(&user) }),
                None => json!({ "authenticated": false }),
            }),
        }
    }

    async fn run_recipe(&self, action: RecipeCommands) -> CliResult<Value> {
        let client = self.client()?;

        match action {
            RecipeCommands::List { category, search } => {
                let recipes = client.list_recipes().await?;
                let filter = RecipeFilter::new(category, search);
                Ok(serde_json::to_value(filter.apply(recipes))?)
            }
            RecipeCommands::Get { id } => Ok(serde_json::to_value(client.get_recipe(&id).await?)?),
            RecipeCommands::Categories => {
                Ok(serde_json::to_value(client.list_categories().await?)?)
            }
            RecipeCommands::Create { fields } => {
                let categories = client.list_categories().await?;
                let mut draft = RecipeDraft {
                    difficulty: "Easy".to_string(),
                    ..Default::default()
                };
                fields.apply_to(&mut draft, &categories)?;
                Ok(client.create_recipe(&draft).await?)
            }
            RecipeCommands::Update { id, fields } => {
                let current = client.get_recipe(&id).await?;
                let categories = client.list_categories().await?;
                let mut draft = RecipeDraft::from(&current);
                fields.apply_to(&mut draft, &categories)?;
                Ok(client.update_recipe(&id, &draft).await?)
            }
            RecipeCommands::Delete { id } => {
                client.delete_recipe(&id).await?;
                Ok(json!({ "deleted": id }))
            }
        }
    }

    async fn run_comment(&self, action: CommentCommands) -> CliResult<Value> {
        let client = self.client()?;

        match action {
            CommentCommands::List { recipe_id } => {
                Ok(serde_json::to_value(client.list_comments(&recipe_id).await?)?)
            }
            CommentCommands::Add { recipe_id, content } => Ok(serde_json::to_value(
                client.add_comment(&recipe_id, &content).await?,
            )?),
        }
    }

    async fn run_saved(&self, kind: SavedListKind, action: SavedCommands) -> CliResult<Value> {
        let owner = self.session.current().map(|u| u.id);
        let saved = SavedRecipes::new(self.session.store(), kind, owner.as_deref());

        match action {
            SavedCommands::List { search } => {
                let ids = saved.ids().await?;
                let lookup = self.client()?.resolve_saved(&ids).await?;

                let valid: Vec<String> = ids
                    .into_iter()
                    .filter(|id| !lookup.missing.contains(id))
                    .collect();
                let removed = saved.retain(&valid).await?;
                if !removed.is_empty() {
                    info!("Dropped {} saved recipe(s) that no longer exist", removed.len());
                }

                let recipes = RecipeFilter::new(None, search).apply(lookup.found);
                Ok(json!({ "recipes": recipes, "removed": removed }))
            }
            SavedCommands::Toggle { id } => {
                let now_saved = saved.toggle(&id).await?;
                Ok(json!({ "id": id, "saved": now_saved }))
            }
            SavedCommands::Remove { id } => {
                let removed = saved.remove(&id).await?;
                Ok(json!({ "id": id, "removed": removed }))
            }
        }
    }
}

/// Public view of the signed-in user. The bearer token is never printed.
fn user_json(user: &UserSession) -> Value {
    json!({
        "id": user.id,
        "username": user.username,
        "email": user.email,
        "role": user.role,
    })
}

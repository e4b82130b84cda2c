//! `postie oschina draft` commands.

mod list;
mod save;

use clap::Subcommand;
use postie_oschina::{OschinaClient, Transport};

use crate::error::CliError;
use crate::output::Output;

use list::ListArgs;
use save::{CreateArgs, UpdateArgs};

#[derive(Subcommand)]
pub(crate) enum DraftCommand {
    /// List drafts, newest first.
    List(ListArgs),
    /// Show a draft as reconstructed from its edit page.
    Show {
        /// Draft ID.
        id: String,
    },
    /// Create a draft.
    Create(CreateArgs),
    /// Update fields of an existing draft.
    Update(UpdateArgs),
    /// Publish a draft as an article.
    Publish {
        /// Draft ID.
        id: String,
    },
    /// Delete a draft.
    Delete {
        /// Draft ID.
        id: String,
    },
}

impl DraftCommand {
    pub(crate) fn execute<T: Transport>(
        self,
        client: &OschinaClient<T>,
        output: &Output,
    ) -> Result<(), CliError> {
        match self {
            Self::List(args) => args.execute(client, output),
            Self::Show { id } => {
                let content = client.get_draft_detail(&id)?;
                output.draft(&id, &content);
                Ok(())
            }
            Self::Create(args) => args.execute(client, output),
            Self::Update(args) => args.execute(client, output),
            Self::Publish { id } => {
                let article_id = client.publish_draft(&id)?;
                output.success(&format!("Draft {id} published as article {article_id}"));
                Ok(())
            }
            Self::Delete { id } => {
                client.delete_draft(&id)?;
                output.success(&format!("Draft {id} deleted"));
                Ok(())
            }
        }
    }
}

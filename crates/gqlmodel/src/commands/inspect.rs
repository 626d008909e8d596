use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::commands::model_config_args::ModelConfigArgs;
use crate::output_utils;
use anyhow::Context;
use libgqlmodel::ModelBuilder;
use libgqlmodel::SchemaModel;
use libgqlmodel::types::Field;
use libgqlmodel::types::SchemaEntity;
use libgqlmodel::types::UnionKind;
use std::collections::HashSet;
use std::fmt::Write;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct InspectCmd {
    #[command(flatten)]
    config: ModelConfigArgs,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files to build the model from.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl InspectCmd {
    fn collect_file_paths(&self) -> anyhow::Result<Vec<PathBuf>> {
        let graphql_file_exts: HashSet<&str> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                let entry = entry.with_context(|| format!(
                    "Failed to scan schema files at/under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:?}.");
                    continue;
                }
                if let Some(ext) = entry_path.extension().and_then(|ext| ext.to_str())
                    && graphql_file_exts.contains(ext) {
                    log::trace!("Found schema file at {entry_path:?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        // A single explicitly named file is loaded whatever its extension.
        if file_paths.is_empty()
            && let [only_path] = self.file_or_dir_paths.as_slice()
            && only_path.is_file() {
            log::warn!(
                "Loading {only_path:?} even though it doesn't match any of the \
                --graphql-file-exts.",
            );
            file_paths.push(only_path.to_path_buf());
        }

        Ok(file_paths)
    }

    fn inspect(&self) -> anyhow::Result<String> {
        let file_paths = self.collect_file_paths()?;
        anyhow::ensure!(!file_paths.is_empty(), "No GraphQL schema files found.");
        log::debug!("Building a model from {} schema files.", file_paths.len());

        let model = ModelBuilder::from_files(self.config.to_model_config(), &file_paths)
            .and_then(ModelBuilder::build)
            .context("Failed to build the schema model")?;

        let mut output = String::new();
        let mut entities = model.entities();
        entities.sort_by(|a, b| a.name().cmp(b.name()));
        for entity in entities {
            render_entity(&mut output, &model, entity)?;
        }
        write!(
            output,
            "{} Built {} entities from {} files.",
            output_utils::GREEN_CHECK,
            model.storage().len(),
            file_paths.len(),
        )?;
        Ok(output)
    }
}

#[inherent::inherent]
impl RunnableCommand for InspectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.inspect() {
            Ok(output) => CommandResult::stdout(format_args!("{output}")),
            Err(err) => CommandResult::failure(&err),
        }
    }
}

fn render_entity(
    output: &mut String,
    model: &SchemaModel,
    entity: &SchemaEntity,
) -> anyhow::Result<()> {
    match entity {
        SchemaEntity::Enum(enum_type) => writeln!(
            output,
            "enum {}: {}",
            entity.key(),
            enum_type.values().join(", "),
        )?,

        SchemaEntity::Object(object_type) => {
            write!(output, "{} {}", entity.kind_name(), entity.key())?;
            let interface_names = object_type.interface_names();
            if !interface_names.is_empty() {
                write!(output, " implements {}", interface_names.join(" & "))?;
            }
            writeln!(output)?;
            for field in object_type.fields() {
                render_field(output, model, field)?;
            }
        },

        SchemaEntity::Scalar(_) => writeln!(output, "scalar {}", entity.key())?,

        SchemaEntity::Union(union_type) => writeln!(
            output,
            "union {} = {}",
            entity.key(),
            union_type.member_names().join(" | "),
        )?,
    }
    Ok(())
}

fn render_field(
    output: &mut String,
    model: &SchemaModel,
    field: &Field,
) -> anyhow::Result<()> {
    let representation = field.representation(model)?;
    write!(
        output,
        "  {}: {}",
        field.name(),
        model.describe_type(&representation.type_repr),
    )?;
    if field.raw_name() != field.name() {
        write!(output, " (raw: {})", field.raw_name())?;
    }
    if !field.nullable() {
        write!(output, " [non-null]")?;
    }
    match &representation.union_kind {
        UnionKind::NoUnion => (),
        UnionKind::SimpleUnion { union, .. } => write!(
            output,
            " [simple union of {}]",
            model.entity_by_id(*union).name(),
        )?,
        UnionKind::TaggedUnion { union, .. } => {
            let members: Vec<String> = representation.union_members(model)?
                .into_iter()
                .map(|member| member.raw_name)
                .collect();
            write!(
                output,
                " [union {}: {}]",
                model.entity_by_id(*union).name(),
                members.join(" | "),
            )?;
        },
    }
    writeln!(output)?;
    Ok(())
}

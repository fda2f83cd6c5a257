mod plan;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use menu_client::{
    ClientConfig, HttpClient, MealGroupCreate, MenuBuilder, SignupForm, Wizard, search_stock,
};
use plan::MenuPlan;
use tracing::info;

/// Build a restaurant menu against the menu backend
#[derive(Debug, Parser)]
#[command(name = "menu-cli", version)]
struct Cli {
    /// REST API base URL [env: MENU_API_URL]
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Host serving published menus [env: MENU_SITE_URL]
    #[arg(long, global = true)]
    site_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk the wizard with a menu plan file, then print the preview
    Build {
        /// JSON menu plan
        plan: PathBuf,

        /// Print the preview as JSON
        #[arg(long)]
        json: bool,

        /// Sign up with this email and publish the menu
        #[arg(long)]
        email: Option<String>,

        #[arg(long, env = "MENU_SIGNUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Search the stock image catalog by tag
    Images {
        #[arg(default_value = "")]
        query: String,
    },

    /// Print the live menu URL for a subdomain
    Url { subdomain: String },

    /// Upload an image (not available)
    Upload { path: PathBuf },

    /// Generate an image from a prompt (not available)
    Generate { prompt: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "menu_cli=info,menu_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = cli.api_url {
        config.base_url = url;
    }
    if let Some(url) = cli.site_url {
        config.site_url = url;
    }
    config.validate()?;

    match cli.command {
        Command::Build {
            plan,
            json,
            email,
            password,
        } => {
            let plan = MenuPlan::load(&plan)?;
            let signup = email.map(|email| {
                let password = password.unwrap_or_default();
                SignupForm::new(email, password.clone(), password)
            });
            // Fail before anything is created on the server
            if let Some(form) = &signup {
                shared::validate::signup(&form.email, &form.password, &form.confirm_password)?;
            }
            let builder = MenuBuilder::from_http(config.build_http_client()?);
            build(&builder, &config, &plan, json).await?;
            if let Some(form) = signup {
                builder.publish(form).await?;
                println!("Menu published.");
            }
        }
        Command::Images { query } => {
            let hits = search_stock(&query);
            if hits.is_empty() {
                println!("No stock images match {query:?}");
            }
            for image in hits {
                println!("{}  [{}]", image.url, image.tags.join(", "));
            }
        }
        Command::Url { subdomain } => {
            let subdomain = shared::util::normalize_subdomain(&subdomain);
            if subdomain.is_empty() {
                bail!("Subdomain has no usable characters");
            }
            println!("{}", config.live_menu_url(&subdomain)?);
        }
        Command::Upload { path } => {
            bail!("Image upload is not available ({})", path.display());
        }
        Command::Generate { prompt } => {
            bail!("Image generation is not available (prompt {prompt:?})");
        }
    }

    Ok(())
}

async fn advance<C: HttpClient>(wizard: &mut Wizard, builder: &MenuBuilder<C>) -> anyhow::Result<()> {
    let step = wizard.next(&builder.state().await)?;
    info!(step = %step, progress = wizard.progress(), "Step complete");
    Ok(())
}

async fn build<C: HttpClient>(
    builder: &MenuBuilder<C>,
    config: &ClientConfig,
    plan: &MenuPlan,
    json: bool,
) -> anyhow::Result<()> {
    let mut wizard = Wizard::new();

    let details = builder
        .create_restaurant(&plan.restaurant.to_details())
        .await
        .context("Restaurant details")?;
    advance(&mut wizard, builder).await?;

    let mut category_ids = Vec::with_capacity(plan.categories.len());
    for category in &plan.categories {
        let created = builder
            .add_category(&category.to_create())
            .await
            .with_context(|| format!("Category {:?}", category.name))?;
        category_ids.push(created.id);
    }
    advance(&mut wizard, builder).await?;

    let mut groups = Vec::new();
    for (category, category_id) in plan.categories.iter().zip(category_ids) {
        for group in &category.groups {
            let created = builder
                .add_meal_group(&MealGroupCreate {
                    category_id,
                    name: group.name.clone(),
                })
                .await
                .with_context(|| format!("Meal group {:?}", group.name))?;
            groups.push((created.id, group));
        }
    }
    advance(&mut wizard, builder).await?;

    for (group_id, group) in groups {
        for meal in &group.meals {
            builder
                .add_meal(&meal.to_create(group_id))
                .await
                .with_context(|| format!("Meal {:?}", meal.name))?;
        }
    }

    let preview = wizard.preview(&builder.state().await)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        println!("{preview}");
    }
    println!("Live menu: {}", config.live_menu_url(&details.subdomain)?);
    Ok(())
}

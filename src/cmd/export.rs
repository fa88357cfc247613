use crate::{
    conf::settings,
    pkg::internal::{
        export::{export_filename, serialize_for_promotion, snapshot},
        store::{ContentStore, Shadow},
    },
    prelude::Result,
};

pub async fn apply(collection: Option<&str>) -> Result<()> {
    let store = ContentStore::load(Shadow::new(&settings.data_dir)).await;
    match collection {
        Some(name) => {
            let promotion = serialize_for_promotion(&store, name)?;
            println!("# paste into {}", promotion.file);
            println!("{}", promotion.json);
        }
        None => {
            let bundle = snapshot(&store);
            let filename = export_filename(bundle.export_date);
            tokio::fs::write(&filename, serde_json::to_string_pretty(&bundle)?).await?;
            println!("Export written to {}", filename);
        }
    }
    Ok(())
}

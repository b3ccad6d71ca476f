use anyhow::Context;
use cantus_core::SongDto;
use cantus_core::services::SongService;
use cantus_storage::SqliteSongStore;

// Crea, busca y borra una canción contra la base configurada en cantus.toml.
fn main() -> anyhow::Result<()> {
  let store = SqliteSongStore::new_from_config().context("failed to open song store")?;
  let service = SongService::new(store);

  let created = service.create(SongDto {
    title: Some("Test Song".to_string()),
    artist: Some("Smoke Tester".to_string()),
    category: Some("test".to_string()),
    duration: Some(42),
    ..Default::default()
  })?;
  let id = created.id.context("store returned a song without id")?;

  println!("Created song with id = {id}");
  println!("Found by artist: {:?}", service.search_by_artist("smoke")?);
  println!("Deleted: {}", service.delete(id)?);

  Ok(())
}

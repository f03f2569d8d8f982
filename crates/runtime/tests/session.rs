//! Player sessions over in-memory transports, with content loaded from disk.

use std::path::Path;

use house_content::ContentFactory;
use house_runtime::{RawTransport, Runtime, RuntimeConfig, Session};

fn write_data_dir(dir: &Path) {
    std::fs::write(
        dir.join("rooms.json"),
        r#"[
            {"name": "Living Room", "desc": "Cozy.", "exits": {"north": "Kitchen"}},
            {"name": "Kitchen", "desc": "Greasy.", "exits": {"south": "Living Room"}}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        dir.join("mobs.json"),
        r#"[{"class": "Dastardly Auger", "avatar": 128013, "desc": "It bores.", "max_hp": 12}]"#,
    )
    .unwrap();
}

async fn run_script(script: &str) -> String {
    run_bytes(script.as_bytes()).await
}

async fn run_bytes(script: &[u8]) -> String {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path());

    let factory = ContentFactory::new(dir.path());
    let house = factory.build_house().unwrap();
    let config = RuntimeConfig::default().with_game_config(factory.load_config().unwrap());
    let runtime = Runtime::builder()
        .config(config)
        .house(house)
        .build()
        .unwrap();

    let transport = RawTransport::new(script, Vec::new());
    let mut session = Session::new(runtime.handle(), transport);
    session.run().await.unwrap();

    let (_, output) = session.into_transport().into_inner().await.unwrap();
    runtime.shutdown().await.unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn test_walkthrough() {
    let output = run_script(
        "spawn Dastardly Auger larry in Living Room\n\
         go larry north\n\
         look Kitchen\n\
         quit\n\
         look Kitchen\n",
    )
    .await;

    assert_eq!(
        output,
        "larry appears in Living Room.\n\
         larry is now in Kitchen.\n\
         Kitchen\n\
         Greasy.\n\
         An exit lies to the south.\n\
         🐍 Dastardly Auger is here and looks healthy.\n\
         Goodbye.\n"
    );
}

#[tokio::test]
async fn test_mistakes_are_reported_and_session_continues() {
    let output = run_script(
        "move ghost to Kitchen\n\
         go nobody sideways\n\
         look Cellar\n\
         dance\n\
         spawn Dastardly Auger larry in Cellar\n",
    )
    .await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "hey! ghost isn't a mob");
    assert!(lines[1].contains("nobody"));
    assert_eq!(lines[2], "there is no Cellar here");
    assert!(lines[3].starts_with("I don't know how to \"dance\""));
    assert_eq!(lines[4], "Can't do that: no room named \"Cellar\".");
    assert_eq!(lines.len(), 5);
}

#[tokio::test]
async fn test_travel_errors_use_player_messages() {
    let output = run_script(
        "spawn Dastardly Auger larry in Living Room\n\
         go larry sideways\n\
         go larry up\n",
    )
    .await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[1], "That isn't a direction you can go.");
    assert_eq!(lines[2], "There's no obvious exit in that direction.");
}

#[tokio::test]
async fn test_garbled_input_does_not_end_session() {
    let output = run_bytes(b"look \xffKitchen\nlook Kitchen\n").await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "there is no \u{FFFD}Kitchen here");
    assert_eq!(lines[1], "Kitchen");
    assert_eq!(lines[2], "Greasy.");
}

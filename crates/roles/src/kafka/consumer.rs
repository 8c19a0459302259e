use crate::kafka::{ROLE_EVENTS_TOPIC, RoleEventHandler};
use anyhow::Result;
use rdkafka::{
    Message,
    config::ClientConfig,
    consumer::{Consumer, StreamConsumer},
};
use std::sync::Arc;
use tokio::{
    task::{JoinHandle, spawn},
    time::{Duration, sleep},
};
use tracing::{error, info, warn};

pub struct RoleEventConsumer {
    consumer: StreamConsumer,
    handler: Arc<RoleEventHandler>,
}

impl RoleEventConsumer {
    pub fn new(brokers: &str, group_id: &str, handler: Arc<RoleEventHandler>) -> Result<Self> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("group.id", group_id)
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "6000")
            .set("enable.auto.commit", "true")
            .set("auto.offset.reset", "latest")
            .create()?;

        Ok(Self { consumer, handler })
    }

    pub async fn start(self) -> Result<JoinHandle<()>> {
        self.consumer.subscribe(&[ROLE_EVENTS_TOPIC])?;

        info!("✅ Kafka consumer started, subscribed to {ROLE_EVENTS_TOPIC}");

        let handler = self.handler;
        let consumer = self.consumer;

        let handle = spawn(async move {
            loop {
                match consumer.recv().await {
                    Err(e) => {
                        error!("Kafka receive error: {e}");
                        sleep(Duration::from_secs(5)).await;
                        continue;
                    }
                    Ok(message) => {
                        let topic = message.topic().to_string();

                        let Some(payload) = message.payload() else {
                            warn!(topic, "⚠️ Empty message payload, ignoring");
                            continue;
                        };

                        handler.handle(payload).await;
                    }
                }
            }
        });

        Ok(handle)
    }
}

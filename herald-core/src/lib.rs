use herald_ack::AcknowledgementService;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub acks: AcknowledgementService,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;

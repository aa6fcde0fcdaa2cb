use dashlist_types::{Channel, NoFilterKey, NoSortField, ResourceKind};

use crate::messages;
use crate::translate::{Message, Translate};
use crate::variant::{Column, LimitSpec, ListVariant, PageSpec, RemovalPolicy};

const CHANNEL_NAME: Message = Message::new("channels.column.name", "Channel Name");

/// Channels page: name plus a delete control, capped by the channel limit.
///
/// A shop needs at least one channel, so the last one is never removable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelsList;

impl ListVariant for ChannelsList {
    type Entity = Channel;
    type SortField = NoSortField;
    type FilterKey = NoFilterKey;

    const PAGE: PageSpec = PageSpec {
        list: "channels",
        title: Message::new("sectionNames.channels", "Channels"),
        create: Message::new("channels.create", "Create Channel"),
        create_test_id: "add-channel",
        no_results: Message::new("channels.empty", "No channels found"),
        limit: Some(LimitSpec {
            kind: ResourceKind::Channels,
            counter: Message::new("channels.limit.counter", "{count}/{max} channels used"),
            reached_title: Message::new("channels.limit.title", "Channel limit reached"),
            reached_body: Message::new(
                "channels.limit.body",
                "You have reached your channel limit, you will be no longer able to add channels to your store. If you would like to up your limit, contact your administration staff about raising your limits.",
            ),
        }),
        filter_bar: None,
    };

    const COLUMNS: &'static [Column<NoSortField>] =
        &[Column::data(CHANNEL_NAME, None), Column::actions(messages::ACTIONS)];
    const NUMBER_OF_COLUMNS: usize = 2;
    const REMOVAL_POLICY: RemovalPolicy = RemovalPolicy::KeepLastOne;

    fn cells(channel: &Channel, _t: &dyn Translate) -> Vec<String> {
        vec![channel.name.clone()]
    }
}

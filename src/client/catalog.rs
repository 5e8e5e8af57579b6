//! Every gateway endpoint the client speaks to.
//!
//! Paths are the compatibility surface with the gateway and must stay
//! byte-for-byte stable. Instance-scoped endpoints get the selected instance
//! appended as the final segment at dispatch time.

use super::endpoint::Endpoint;

// Instance lifecycle
pub const INSTANCE_CREATE: Endpoint = Endpoint::post("/instance/create").unscoped();
pub const INSTANCE_FETCH: Endpoint = Endpoint::get("/instance/fetchInstances").unscoped();
pub const INSTANCE_CONNECT: Endpoint = Endpoint::get("/instance/connect");
pub const INSTANCE_RESTART: Endpoint = Endpoint::post("/instance/restart");
pub const INSTANCE_SET_PRESENCE: Endpoint = Endpoint::post("/instance/setPresence");
pub const INSTANCE_CONNECTION_STATE: Endpoint = Endpoint::get("/instance/connectionState");
pub const INSTANCE_LOGOUT: Endpoint = Endpoint::delete("/instance/logout");
pub const INSTANCE_DELETE: Endpoint = Endpoint::delete("/instance/delete").with_global_auth();

// Webhook
pub const WEBHOOK_SET: Endpoint = Endpoint::post("/webhook/set");
pub const WEBHOOK_FIND: Endpoint = Endpoint::get("/webhook/find");

// Settings
pub const SETTINGS_SET: Endpoint = Endpoint::post("/settings/set");
pub const SETTINGS_FIND: Endpoint = Endpoint::get("/settings/find");

// Messages
pub const MESSAGE_SEND_TEXT: Endpoint = Endpoint::post("/message/sendText");
pub const MESSAGE_SEND_IMAGE: Endpoint = Endpoint::post("/message/sendImage");
pub const MESSAGE_SEND_VIDEO: Endpoint = Endpoint::post("/message/sendVideo");
pub const MESSAGE_SEND_AUDIO: Endpoint = Endpoint::post("/message/sendAudio");
pub const MESSAGE_SEND_DOCUMENT: Endpoint = Endpoint::post("/message/sendDocument");
pub const MESSAGE_SEND_LOCATION: Endpoint = Endpoint::post("/message/sendLocation");
pub const MESSAGE_SEND_CONTACT: Endpoint = Endpoint::post("/message/sendContact");
pub const MESSAGE_SEND_REACTION: Endpoint = Endpoint::post("/message/sendReaction");
pub const MESSAGE_REPLY: Endpoint = Endpoint::post("/message/reply");
pub const MESSAGE_SEND_MEDIA: Endpoint = Endpoint::post("/message/sendMedia");
pub const MESSAGE_SEND_BUTTONS: Endpoint = Endpoint::post("/message/sendButtons");
pub const MESSAGE_SEND_LIST: Endpoint = Endpoint::post("/message/sendList");

// Groups
pub const GROUP_CREATE: Endpoint = Endpoint::post("/group/create");
pub const GROUP_UPDATE_SUBJECT: Endpoint = Endpoint::post("/group/updateGroupSubject");
pub const GROUP_UPDATE_DESCRIPTION: Endpoint = Endpoint::post("/group/updateGroupDescription");
pub const GROUP_UPDATE_PICTURE: Endpoint = Endpoint::post("/group/updateGroupPicture");
pub const GROUP_ADD_PARTICIPANTS: Endpoint = Endpoint::post("/group/addParticipants");
pub const GROUP_REMOVE_PARTICIPANTS: Endpoint = Endpoint::post("/group/removeParticipants");
pub const GROUP_PROMOTE_PARTICIPANTS: Endpoint = Endpoint::post("/group/promoteParticipants");
pub const GROUP_DEMOTE_PARTICIPANTS: Endpoint = Endpoint::post("/group/demoteParticipants");
pub const GROUP_INVITE_CODE: Endpoint = Endpoint::get("/group/inviteCode");
pub const GROUP_REVOKE_INVITE_CODE: Endpoint = Endpoint::put("/group/revokeInviteCode");
pub const GROUP_INFO: Endpoint = Endpoint::get("/group/getInfo");
pub const GROUP_LEAVE: Endpoint = Endpoint::delete("/group/leaveGroup");

// Chats
pub const CHAT_FIND: Endpoint = Endpoint::get("/chat/findChat");
pub const CHAT_FETCH_ALL: Endpoint = Endpoint::get("/chat/fetchAllChats");
pub const CHAT_FETCH_PRIVATE: Endpoint = Endpoint::get("/chat/fetchPrivateChats");
pub const CHAT_FETCH_GROUP: Endpoint = Endpoint::get("/chat/fetchGroupChats");
pub const CHAT_FETCH_MESSAGES: Endpoint = Endpoint::get("/chat/fetchMessages");
pub const CHAT_MARK_READ: Endpoint = Endpoint::post("/chat/markMessageAsRead");
pub const CHAT_ARCHIVE: Endpoint = Endpoint::post("/chat/archiveChat");
pub const CHAT_UNARCHIVE: Endpoint = Endpoint::post("/chat/unarchiveChat");
pub const CHAT_DELETE: Endpoint = Endpoint::delete("/chat/deleteChat");
pub const CHAT_DELETE_MESSAGE: Endpoint = Endpoint::delete("/chat/deleteMessage");
pub const CHAT_CLEAR: Endpoint = Endpoint::post("/chat/clearChat");
pub const CHAT_WHATSAPP_NUMBERS: Endpoint = Endpoint::post("/chat/whatsappNumbers");
pub const CHAT_FIND_CONTACTS: Endpoint = Endpoint::post("/chat/findContacts");
pub const CHAT_FIND_MESSAGES: Endpoint = Endpoint::post("/chat/findMessages");
pub const CHAT_FIND_CHATS: Endpoint = Endpoint::post("/chat/findChats");
pub const CHAT_PROFILE_PICTURE: Endpoint = Endpoint::post("/chat/fetchProfilePictureUrl");

// Typebot integration
#[cfg(feature = "typebot")]
pub const TYPEBOT_CREATE: Endpoint = Endpoint::post("/typebot/create");
#[cfg(feature = "typebot")]
pub const TYPEBOT_FIND: Endpoint = Endpoint::get("/typebot/find");
#[cfg(feature = "typebot")]
pub const TYPEBOT_FETCH: Endpoint = Endpoint::get("/typebot/fetch");
#[cfg(feature = "typebot")]
pub const TYPEBOT_START: Endpoint = Endpoint::post("/typebot/start");

// OpenAI integration
#[cfg(feature = "openai")]
pub const OPENAI_CREATE: Endpoint = Endpoint::post("/openai/create");
#[cfg(feature = "openai")]
pub const OPENAI_CREDS: Endpoint = Endpoint::post("/openai/creds");

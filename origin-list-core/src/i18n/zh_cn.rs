//! 中文消息 (zh-CN)

use super::keys::{Messages, SliderTexts, StatusTexts};

pub const MESSAGES: Messages = Messages {
    status: StatusTexts {
        block: "已阻止 XXX 跟踪您",
        noaction: "XXX 似乎没有跟踪您",
        allow: "已允许 XXX，它可能正在跟踪您",
    },
    dnt_tooltip: "该域名承诺不会跟踪您。",
    slider: SliderTexts {
        block: "完全阻止该域名",
        cookieblock: "允许请求但阻止该域名的 Cookie",
        allow: "允许该域名",
    },
    feed_the_badger_title: "点击将该域名交还给自动控制",
};

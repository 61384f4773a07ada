//! Compiled-in channel table for the Shanghai BesTV lineup

use crate::models::ChannelEntry;

/// The channels this gateway serves, in playlist output order.
pub const CHANNELS: &[ChannelEntry] = &[
    ChannelEntry {
        key: "dfws",
        upstream_id: "2030",
        display_name: "东方卫视",
        tvg_id: "东方卫视",
        tvg_name: "东方卫视",
        logo_url: "https://epg.iill.top/logo/东方卫视4K.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "wxty",
        upstream_id: "1605",
        display_name: "五星体育",
        tvg_id: "五星体育",
        tvg_name: "五星体育",
        logo_url: "https://epg.iill.top/logo/五星体育.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "dycj",
        upstream_id: "21",
        display_name: "上海第一财经",
        tvg_id: "上海第一财经",
        tvg_name: "上海第一财经",
        logo_url: "https://epg.iill.top/logo/第一财经.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "xwzh",
        upstream_id: "20",
        display_name: "上海新闻综合",
        tvg_id: "上海新闻综合",
        tvg_name: "上海新闻综合",
        logo_url: "https://epg.iill.top/logo/上海新闻.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "dspd",
        upstream_id: "18",
        display_name: "上海都市频道",
        tvg_id: "上海都市频道",
        tvg_name: "上海都市频道",
        logo_url: "https://epg.iill.top/logo/上海都市.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "xjs",
        upstream_id: "1600",
        display_name: "新纪实",
        tvg_id: "新纪实",
        tvg_name: "新纪实",
        logo_url: "https://epg.iill.top/logo/新纪实.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "mdy",
        upstream_id: "1601",
        display_name: "魔都眼",
        tvg_id: "魔都眼",
        tvg_name: "魔都眼",
        logo_url: "https://epg.iill.top/logo/魔都眼.png",
        group_title: "上海台",
    },
    ChannelEntry {
        key: "ash",
        upstream_id: "2029",
        display_name: "爱上海",
        tvg_id: "爱上海",
        tvg_name: "爱上海",
        logo_url: "https://epg.iill.top/logo/爱上海.png",
        group_title: "上海台",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_upstream_ids_are_unique() {
        let ids: HashSet<_> = CHANNELS.iter().map(|c| c.upstream_id).collect();
        assert_eq!(ids.len(), CHANNELS.len());
    }

    #[test]
    fn test_catalog_entries_are_complete() {
        for entry in CHANNELS {
            assert!(!entry.key.is_empty());
            assert!(!entry.upstream_id.is_empty());
            assert!(!entry.display_name.is_empty());
            assert!(entry.logo_url.starts_with("https://"));
            assert_eq!(entry.group_title, "上海台");
        }
    }
}

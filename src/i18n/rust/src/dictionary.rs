/* src/i18n/rust/src/dictionary.rs */

//! Bilingual phrase table. Each entry is an `(en, zh)` pair, so a lookup can
//! start from either side and land on the requested language.

use crate::language::Language;

const PAIRS: &[(&str, &str)] = &[
  // navigation
  ("Home", "首页"),
  ("Calendar", "日历"),
  ("Features", "功能"),
  ("About", "关于"),
  // time
  ("Current Time", "当前时间"),
  ("Today", "今日"),
  ("Yesterday", "昨日"),
  ("Tomorrow", "明日"),
  // solar terms
  ("Beginning of Autumn", "立秋"),
  ("End of Heat", "处暑"),
  ("White Dew", "白露"),
  ("Autumnal Equinox", "秋分"),
  // months
  ("January", "一月"),
  ("February", "二月"),
  ("March", "三月"),
  ("April", "四月"),
  ("May", "五月"),
  ("June", "六月"),
  ("July", "七月"),
  ("August", "八月"),
  ("September", "九月"),
  ("October", "十月"),
  ("November", "十一月"),
  ("December", "十二月"),
  // weekdays
  ("Sunday", "星期日"),
  ("Monday", "星期一"),
  ("Tuesday", "星期二"),
  ("Wednesday", "星期三"),
  ("Thursday", "星期四"),
  ("Friday", "星期五"),
  ("Saturday", "星期六"),
  // actions
  ("Export", "导出"),
  ("Print", "打印"),
  ("Share", "分享"),
  ("Settings", "设置"),
  ("Help", "帮助"),
  // messages
  ("Loading", "加载中"),
  ("Error", "错误"),
  ("Success", "成功"),
  ("Warning", "警告"),
  ("Info", "信息"),
];

/// Translate `key` into `lang`. Keys may be given in either language;
/// unknown keys come back unchanged.
pub fn translate(lang: Language, key: &str) -> &str {
  for &(en, zh) in PAIRS {
    if key == en || key == zh {
      return lang.pick(zh, en);
    }
  }
  key
}

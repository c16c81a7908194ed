//! 测试共用的样例数据
#![allow(dead_code)]

use text2region::{parse_all, Hierarchy};

/// 24 行样例，带行号前缀，除最后一行外都以制表符结尾
pub const SAMPLE: &str = concat!(
    "39986| 贵州省\t520000\t毕节市\t520500\t七星关区\t520502\t德溪街道\t520502010\t\n",
    "39987| 广西壮族自治区\t450000\t防城港市\t450600\t防城区\t450603\t珠河街道\t450603002\t\n",
    "39988| 广西壮族自治区\t450000\t防城港市\t450600\t防城区\t450603\t水营街道\t450603001\t\n",
    "39989| 广西壮族自治区\t450000\t防城港市\t450600\t防城区\t450603\t文昌街道\t450603003\t\n",
    "39990| 河南省\t410000\t驻马店市\t411700\t新蔡县\t411729\t月亮湾街道\t411729003\t\n",
    "39991| 广西壮族自治区\t450000\t崇左市\t451400\t江州区\t451402\t石景林街道\t451402003\t\n",
    "39992| 河南省\t410000\t安阳市\t410500\t滑县\t410526\t锦和街道\t410526003\t\n",
    "39993| 贵州省\t520000\t黔西南布依族苗族自治州\t522300\t贞丰县\t522325\t珉谷街道\t522325002\t\n",
    "39994| 辽宁省\t210000\t盘锦市\t211100\t兴隆台区\t211103\t沈采街道\t211103013\t\n",
    "39995| 辽宁省\t210000\t沈阳市\t210100\t新民市\t210181\t兴隆堡镇\t210181108\t\n",
    "39996| 湖南省\t430000\t娄底市\t431300\t涟源市\t431382\t湖泉镇\t431382117\t\n",
    "39997| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t八区街道\t220822002\t\n",
    "39998| 吉林省\t220000\t白城市\t220800\t通榆县\t220822\t开通镇\t220822100\t\n",
    "39999| 湖南省\t430000\t常德市\t430700\t武陵区\t430702\t柳叶湖街道\t430702013\t\n",
    "40000| 江苏省\t320000\t苏州市\t320500\t常熟市\t320581\t东南街道\t320581006\t\n",
    "40001| 湖南省\t430000\t衡阳市\t430400\t衡南县\t430422\t云集街道\t430422001\t\n",
    "40002| 江苏省\t320000\t苏州市\t320500\t昆山市\t320583\t花桥镇\t320583104\t\n",
    "40003| 上海市\t310000\t上海市\t310100\t青浦区\t310118\t白鹤镇\t310118110\t\n",
    "40004| 四川省\t510000\t资阳市\t512000\t雁江区\t512002\t宝莲街道\t512002005\t\n",
    "40005| 天津市\t120000\t天津市\t120100\t宁河区\t120117\t北淮淀镇\t120117113\t\n",
    "40006| 天津市\t120000\t天津市\t120100\t宁河区\t120117\t七里海镇\t120117110\t\n",
    "40007| 北京市\t110000\t北京市\t110100\t西城区\t110102\t白纸坊街道\t110102019\t\n",
    "40008| 河南省\t410000\t新乡市\t410700\t原阳县\t410725\t阳和街道\t410725002\t\n",
    "40009| 贵州省\t520000\t毕节市\t520500\t金沙县\t520523\t民兴街道\t520523005",
);

pub fn sample_hierarchy() -> Hierarchy {
    Hierarchy::build(parse_all(SAMPLE))
}
